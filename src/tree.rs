//! Generic tree view of a block forest, for ordering and diagnostics.
//!
//! Nothing here feeds back into synthesis.

use crate::blocks::{Block, BlockRef};

/// A block with the tree nodes of its structural children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<'a> {
    pub block: BlockRef<'a>,
    pub children: Vec<TreeNode<'a>>,
    pub is_nestable: bool,
    pub hierarchy: usize,
}

/// One entry of a pre-order flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenedNode<'a> {
    pub block: BlockRef<'a>,
    pub depth: usize,
    pub is_nestable: bool,
}

pub fn block_to_tree_node(block: &Block, hierarchy: usize) -> TreeNode<'_> {
    ref_to_tree_node(block.view(), hierarchy)
}

pub fn blocks_to_tree_nodes(blocks: &[Block], hierarchy: usize) -> Vec<TreeNode<'_>> {
    blocks.iter().map(|b| block_to_tree_node(b, hierarchy)).collect()
}

fn ref_to_tree_node(block: BlockRef<'_>, hierarchy: usize) -> TreeNode<'_> {
    let child = hierarchy + 1;
    let children = match block {
        BlockRef::FunctionCall(_) => {
            return TreeNode { block, children: Vec::new(), is_nestable: false, hierarchy };
        }
        BlockRef::If(b) => {
            let mut children = blocks_to_tree_nodes(&b.then_blocks, child);
            children.extend(
                b.else_if_blocks
                    .iter()
                    .map(|branch| ref_to_tree_node(BlockRef::ElseIf(branch), child)),
            );
            if let Some(else_block) = &b.else_block {
                children.push(ref_to_tree_node(BlockRef::Else(else_block), child));
            }
            children
        }
        BlockRef::ElseIf(b) => blocks_to_tree_nodes(&b.blocks, child),
        BlockRef::Else(b) => blocks_to_tree_nodes(&b.blocks, child),
        BlockRef::While(b) => blocks_to_tree_nodes(&b.loop_blocks, child),
    };
    TreeNode { block, children, is_nestable: true, hierarchy }
}

/// Pre-order: a node, then each child's flattening one level deeper.
pub fn flatten_tree<'a>(node: &TreeNode<'a>, depth: usize) -> Vec<FlattenedNode<'a>> {
    let mut out = Vec::new();
    flatten_into(node, depth, &mut out);
    out
}

fn flatten_into<'a>(node: &TreeNode<'a>, depth: usize, out: &mut Vec<FlattenedNode<'a>>) {
    out.push(FlattenedNode { block: node.block, depth, is_nestable: node.is_nestable });
    if node.is_nestable {
        for child in &node.children {
            flatten_into(child, depth + 1, out);
        }
    }
}

pub fn blocks_to_flattened_nodes(blocks: &[Block]) -> Vec<FlattenedNode<'_>> {
    blocks_to_tree_nodes(blocks, 0)
        .iter()
        .flat_map(|node| flatten_tree(node, 0))
        .collect()
}

/// Short label used in tree diagrams: kind, index, and condition or callee.
pub fn node_label(block: BlockRef<'_>) -> String {
    let mut label = format!("{} #{}", block.block_type(), block.index());
    match block {
        BlockRef::FunctionCall(b) => {
            label.push_str(&format!(" {} = {}", b.return_variable.name, b.function_info.name));
        }
        other => {
            if let Some(condition) = other.condition() {
                label.push_str(&format!(" ({condition})"));
            }
        }
    }
    label
}

/// Render one tree with box-drawing connectors.
pub fn render_tree(node: &TreeNode<'_>) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, "", true);
    out
}

fn write_tree(out: &mut String, node: &TreeNode<'_>, prefix: &str, is_last: bool) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push_str(&node_label(node.block));
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        write_tree(out, child, &child_prefix, i + 1 == count);
    }
}

/// Print one tree to stdout.
pub fn print_tree(node: &TreeNode<'_>) {
    print!("{}", render_tree(node));
}

/// Print each tree followed by a blank line.
pub fn print_nodes(nodes: &[TreeNode<'_>]) {
    for node in nodes {
        print_tree(node);
        println!();
    }
}
