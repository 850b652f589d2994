//! Block forest visitor
//!
//! `BlockVisitor` walks every block of a forest in pre-order, descending into
//! `thenBlocks`, each `elseIfBlocks` entry, `elseBlock` and `loopBlocks`.
//! Override the methods you need and call the matching `walk_*` function to
//! keep recursing; omit the call to prune that subtree.
//!
//! ```rust
//! use blockgen::blocks::{Block, FunctionCallBlock};
//! use blockgen::visit::{BlockVisitor, walk_blocks};
//!
//! struct CallNames(Vec<String>);
//!
//! impl BlockVisitor for CallNames {
//!     fn visit_function_call(&mut self, block: &FunctionCallBlock) {
//!         self.0.push(block.function_info.name.clone());
//!     }
//! }
//!
//! fn call_names(blocks: &[Block]) -> Vec<String> {
//!     let mut v = CallNames(Vec::new());
//!     walk_blocks(&mut v, blocks);
//!     v.0
//! }
//! ```

use crate::blocks::*;

pub trait BlockVisitor: Sized {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_function_call(&mut self, _block: &FunctionCallBlock) {}

    fn visit_if(&mut self, block: &IfBlock) {
        walk_if(self, block);
    }

    fn visit_else_if(&mut self, block: &ElseIfBlock) {
        walk_else_if(self, block);
    }

    fn visit_else(&mut self, block: &ElseBlock) {
        walk_else(self, block);
    }

    fn visit_while(&mut self, block: &WhileLoopBlock) {
        walk_while(self, block);
    }
}

// ============================================================================
// Walk Functions
// ============================================================================

pub fn walk_blocks<V: BlockVisitor>(v: &mut V, blocks: &[Block]) {
    for block in blocks {
        v.visit_block(block);
    }
}

pub fn walk_block<V: BlockVisitor>(v: &mut V, block: &Block) {
    match block {
        Block::FunctionCall(b) => v.visit_function_call(b),
        Block::If(b) => v.visit_if(b),
        Block::ElseIf(b) => v.visit_else_if(b),
        Block::Else(b) => v.visit_else(b),
        Block::While(b) => v.visit_while(b),
    }
}

pub fn walk_if<V: BlockVisitor>(v: &mut V, block: &IfBlock) {
    walk_blocks(v, &block.then_blocks);
    for branch in &block.else_if_blocks {
        v.visit_else_if(branch);
    }
    if let Some(else_block) = &block.else_block {
        v.visit_else(else_block);
    }
}

pub fn walk_else_if<V: BlockVisitor>(v: &mut V, block: &ElseIfBlock) {
    walk_blocks(v, &block.blocks);
}

pub fn walk_else<V: BlockVisitor>(v: &mut V, block: &ElseBlock) {
    walk_blocks(v, &block.blocks);
}

pub fn walk_while<V: BlockVisitor>(v: &mut V, block: &WhileLoopBlock) {
    walk_blocks(v, &block.loop_blocks);
}

// ============================================================================
// Collectors
// ============================================================================

/// Counts every block, branch headers included.
#[derive(Default)]
pub(crate) struct BlockCounter {
    pub count: usize,
}

impl BlockVisitor for BlockCounter {
    fn visit_block(&mut self, block: &Block) {
        // Branches reached through an `if` are counted in visit_else_if / visit_else.
        if !matches!(block, Block::ElseIf(_) | Block::Else(_)) {
            self.count += 1;
        }
        walk_block(self, block);
    }

    fn visit_else_if(&mut self, block: &ElseIfBlock) {
        self.count += 1;
        walk_else_if(self, block);
    }

    fn visit_else(&mut self, block: &ElseBlock) {
        self.count += 1;
        walk_else(self, block);
    }
}

struct AsyncScanner {
    found: bool,
}

impl BlockVisitor for AsyncScanner {
    fn visit_block(&mut self, block: &Block) {
        if !self.found {
            walk_block(self, block);
        }
    }

    fn visit_function_call(&mut self, block: &FunctionCallBlock) {
        self.found |= block.is_async;
    }
}

struct ReturnVariables {
    variables: Vec<VariableInfoWithIndex>,
}

impl BlockVisitor for ReturnVariables {
    fn visit_function_call(&mut self, block: &FunctionCallBlock) {
        self.variables.push(VariableInfoWithIndex::new(
            block.return_variable.name.clone(),
            block.return_variable.ty.clone(),
            block.index,
        ));
    }
}

/// Whether any call block anywhere in the forest is async.
pub fn contains_async_call(blocks: &[Block]) -> bool {
    let mut scanner = AsyncScanner { found: false };
    walk_blocks(&mut scanner, blocks);
    scanner.found
}

/// Return variables of every call block in the forest, in creation-index order.
pub fn collect_return_variables(blocks: &[Block]) -> Vec<VariableInfoWithIndex> {
    let mut collector = ReturnVariables { variables: Vec::new() };
    walk_blocks(&mut collector, blocks);
    collector.variables.sort_by_key(|v| v.index);
    collector.variables
}
