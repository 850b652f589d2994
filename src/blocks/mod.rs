use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, typed value: a function parameter or a produced variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into() }
    }
}

/// A produced variable tagged with the index of the block that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableInfoWithIndex {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub index: usize,
}

impl VariableInfoWithIndex {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, index: usize) -> Self {
        Self { name: name.into(), ty: ty.into(), index }
    }

    pub fn info(&self) -> VariableInfo {
        VariableInfo::new(self.name.clone(), self.ty.clone())
    }
}

/// Descriptor of a callable function, as supplied by a source scanner.
///
/// `documentation` is carried through untouched; the generator never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<VariableInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl FunctionInfo {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: Some(return_type.into()),
            parameters: None,
            documentation: None,
        }
    }

    /// A descriptor whose return type the scanner could not determine.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self { name: name.into(), return_type: None, parameters: None, documentation: None }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(VariableInfo::new(name, ty));
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// The five block kinds, as written in the `blockType` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    FunctionCall,
    If,
    ElseIf,
    Else,
    While,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::FunctionCall => "functionCall",
            BlockType::If => "if",
            BlockType::ElseIf => "elseIf",
            BlockType::Else => "else",
            BlockType::While => "while",
        }
    }

    /// Whether blocks of this kind can hold children.
    pub fn is_nestable(self) -> bool {
        !matches!(self, BlockType::FunctionCall)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallBlock {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub function_info: FunctionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<VariableInfo>>,
    pub return_variable: VariableInfo,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfBlock {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub condition: String,
    #[serde(default)]
    pub then_blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub else_if_blocks: Vec<ElseIfBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_block: Option<ElseBlock>,
}

/// An `else if` branch. Lives inside an [`IfBlock`]; its index is issued by
/// `create_if_block` when the enclosing `if` is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElseIfBlock {
    #[serde(default)]
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub condition: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ElseIfBlock {
    pub fn new(condition: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self { index: 0, comment: None, condition: condition.into(), blocks }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// The final `else` branch of an [`IfBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElseBlock {
    #[serde(default)]
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ElseBlock {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { index: 0, comment: None, blocks }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhileLoopBlock {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub condition: String,
    #[serde(default)]
    pub loop_blocks: Vec<Block>,
}

/// Block structs that own a comment slot.
pub trait Commented {
    fn index(&self) -> usize;
    fn set_comment(&mut self, comment: Option<String>);
}

impl Commented for FunctionCallBlock {
    fn index(&self) -> usize {
        self.index
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

impl Commented for IfBlock {
    fn index(&self) -> usize {
        self.index
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

impl Commented for WhileLoopBlock {
    fn index(&self) -> usize {
        self.index
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

/// One node of the block forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "blockType", rename_all = "camelCase")]
pub enum Block {
    FunctionCall(FunctionCallBlock),
    If(IfBlock),
    ElseIf(ElseIfBlock),
    Else(ElseBlock),
    While(WhileLoopBlock),
}

impl Block {
    pub fn index(&self) -> usize {
        self.view().index()
    }

    pub fn block_type(&self) -> BlockType {
        self.view().block_type()
    }

    pub fn comment(&self) -> Option<&str> {
        self.view().comment()
    }

    pub fn view(&self) -> BlockRef<'_> {
        match self {
            Block::FunctionCall(b) => BlockRef::FunctionCall(b),
            Block::If(b) => BlockRef::If(b),
            Block::ElseIf(b) => BlockRef::ElseIf(b),
            Block::Else(b) => BlockRef::Else(b),
            Block::While(b) => BlockRef::While(b),
        }
    }

    pub fn view_mut(&mut self) -> BlockMut<'_> {
        match self {
            Block::FunctionCall(b) => BlockMut::FunctionCall(b),
            Block::If(b) => BlockMut::If(b),
            Block::ElseIf(b) => BlockMut::ElseIf(b),
            Block::Else(b) => BlockMut::Else(b),
            Block::While(b) => BlockMut::While(b),
        }
    }
}

impl From<FunctionCallBlock> for Block {
    fn from(b: FunctionCallBlock) -> Self {
        Block::FunctionCall(b)
    }
}

impl From<IfBlock> for Block {
    fn from(b: IfBlock) -> Self {
        Block::If(b)
    }
}

impl From<ElseIfBlock> for Block {
    fn from(b: ElseIfBlock) -> Self {
        Block::ElseIf(b)
    }
}

impl From<ElseBlock> for Block {
    fn from(b: ElseBlock) -> Self {
        Block::Else(b)
    }
}

impl From<WhileLoopBlock> for Block {
    fn from(b: WhileLoopBlock) -> Self {
        Block::While(b)
    }
}

/// Borrowed view of any block, including the branches stored inside an `if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRef<'a> {
    FunctionCall(&'a FunctionCallBlock),
    If(&'a IfBlock),
    ElseIf(&'a ElseIfBlock),
    Else(&'a ElseBlock),
    While(&'a WhileLoopBlock),
}

impl<'a> BlockRef<'a> {
    pub fn index(self) -> usize {
        match self {
            BlockRef::FunctionCall(b) => b.index,
            BlockRef::If(b) => b.index,
            BlockRef::ElseIf(b) => b.index,
            BlockRef::Else(b) => b.index,
            BlockRef::While(b) => b.index,
        }
    }

    pub fn block_type(self) -> BlockType {
        match self {
            BlockRef::FunctionCall(_) => BlockType::FunctionCall,
            BlockRef::If(_) => BlockType::If,
            BlockRef::ElseIf(_) => BlockType::ElseIf,
            BlockRef::Else(_) => BlockType::Else,
            BlockRef::While(_) => BlockType::While,
        }
    }

    pub fn comment(self) -> Option<&'a str> {
        match self {
            BlockRef::FunctionCall(b) => b.comment.as_deref(),
            BlockRef::If(b) => b.comment.as_deref(),
            BlockRef::ElseIf(b) => b.comment.as_deref(),
            BlockRef::Else(b) => b.comment.as_deref(),
            BlockRef::While(b) => b.comment.as_deref(),
        }
    }

    /// The condition string of `if`, `elseIf` and `while` blocks.
    pub fn condition(self) -> Option<&'a str> {
        match self {
            BlockRef::If(b) => Some(&b.condition),
            BlockRef::ElseIf(b) => Some(&b.condition),
            BlockRef::While(b) => Some(&b.condition),
            BlockRef::FunctionCall(_) | BlockRef::Else(_) => None,
        }
    }
}

impl<'a> From<&'a Block> for BlockRef<'a> {
    fn from(block: &'a Block) -> Self {
        block.view()
    }
}

/// Mutable view of any block; handed to the transform of `locate_and_replace`.
#[derive(Debug)]
pub enum BlockMut<'a> {
    FunctionCall(&'a mut FunctionCallBlock),
    If(&'a mut IfBlock),
    ElseIf(&'a mut ElseIfBlock),
    Else(&'a mut ElseBlock),
    While(&'a mut WhileLoopBlock),
}

impl BlockMut<'_> {
    pub fn index(&self) -> usize {
        match self {
            BlockMut::FunctionCall(b) => b.index,
            BlockMut::If(b) => b.index,
            BlockMut::ElseIf(b) => b.index,
            BlockMut::Else(b) => b.index,
            BlockMut::While(b) => b.index,
        }
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        match self {
            BlockMut::FunctionCall(b) => b.comment = comment,
            BlockMut::If(b) => b.comment = comment,
            BlockMut::ElseIf(b) => b.comment = comment,
            BlockMut::Else(b) => b.comment = comment,
            BlockMut::While(b) => b.comment = comment,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockMut::FunctionCall(_) => BlockType::FunctionCall,
            BlockMut::If(_) => BlockType::If,
            BlockMut::ElseIf(_) => BlockType::ElseIf,
            BlockMut::Else(_) => BlockType::Else,
            BlockMut::While(_) => BlockType::While,
        }
    }
}

/// Session state threaded through every constructor call.
///
/// `variables` holds exactly the return variables of created call blocks, in
/// creation order. `is_async` only ever turns on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGeneratorState {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub variables: Vec<VariableInfoWithIndex>,
    #[serde(default)]
    pub is_async: bool,
    /// Names bound outside the generated function. Argument resolution falls
    /// back to these before using a parameter's own name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<VariableInfo>,
}

impl CodeGeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session that can refer to names bound by an enclosing scope.
    pub fn with_scope(scope: Vec<VariableInfo>) -> Self {
        Self { scope, ..Self::default() }
    }

    /// Rebuild session state from a bare block forest: every call block's
    /// return variable, ordered by creation index, and the async flag of the
    /// whole forest.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let variables = crate::visit::collect_return_variables(&blocks);
        let is_async = crate::visit::contains_async_call(&blocks);
        Self { blocks, variables, is_async, scope: Vec::new() }
    }

    /// Total number of blocks in the forest; the index the next block receives.
    pub fn block_count(&self) -> usize {
        crate::naming::count_all_blocks(&self.blocks)
    }
}

/// A freshly created block together with the state that now contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAndState<T> {
    pub block: T,
    pub state: CodeGeneratorState,
}
