//! Locating a block anywhere in the forest by its index.
//!
//! Indices are unique across the forest, so the search stops at the first hit
//! and never revisits a block.

use crate::blocks::{Block, BlockMut, ElseBlock, ElseIfBlock, IfBlock};
use crate::diagnostics::GenError;

/// Find the block whose index is `target_index` and apply `transform` to it.
///
/// Returns the rebuilt forest; blocks off the path to the target are moved
/// over untouched. Fails with `NestTargetNotFound` if no block has that index.
pub fn locate_and_replace<F>(
    mut blocks: Vec<Block>,
    target_index: usize,
    transform: F,
) -> Result<Vec<Block>, GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    let mut transform = Some(transform);
    locate_in(&mut blocks, target_index, &mut transform)?;
    if transform.is_some() {
        return Err(GenError::target_not_found(target_index));
    }
    Ok(blocks)
}

/// Append `child` to the child collection a nesting target owns.
pub fn append_child(target: BlockMut<'_>, child: Block) -> Result<(), GenError> {
    match target {
        BlockMut::If(b) => b.then_blocks.push(child),
        BlockMut::While(b) => b.loop_blocks.push(child),
        BlockMut::ElseIf(b) => b.blocks.push(child),
        BlockMut::Else(b) => b.blocks.push(child),
        BlockMut::FunctionCall(b) => {
            return Err(GenError::unsupported_nesting(
                b.index,
                crate::blocks::BlockType::FunctionCall,
            ));
        }
    }
    Ok(())
}

// `transform` is Some until it has been applied.
fn locate_in<F>(blocks: &mut [Block], target: usize, transform: &mut Option<F>) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    for block in blocks.iter_mut() {
        if transform.is_none() {
            break;
        }
        locate_block(block, target, transform)?;
    }
    Ok(())
}

fn locate_block<F>(block: &mut Block, target: usize, transform: &mut Option<F>) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    if block.index() == target {
        return apply(block.view_mut(), transform);
    }
    match block {
        Block::FunctionCall(_) => Ok(()),
        Block::If(b) => locate_if(b, target, transform),
        Block::ElseIf(b) => locate_else_if(b, target, transform),
        Block::Else(b) => locate_else(b, target, transform),
        Block::While(b) => locate_in(&mut b.loop_blocks, target, transform),
    }
}

fn locate_if<F>(block: &mut IfBlock, target: usize, transform: &mut Option<F>) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    locate_in(&mut block.then_blocks, target, transform)?;
    for branch in &mut block.else_if_blocks {
        if transform.is_none() {
            return Ok(());
        }
        locate_else_if(branch, target, transform)?;
    }
    if let Some(else_block) = &mut block.else_block {
        if transform.is_some() {
            locate_else(else_block, target, transform)?;
        }
    }
    Ok(())
}

fn locate_else_if<F>(
    branch: &mut ElseIfBlock,
    target: usize,
    transform: &mut Option<F>,
) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    if branch.index == target {
        return apply(BlockMut::ElseIf(branch), transform);
    }
    locate_in(&mut branch.blocks, target, transform)
}

fn locate_else<F>(branch: &mut ElseBlock, target: usize, transform: &mut Option<F>) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    if branch.index == target {
        return apply(BlockMut::Else(branch), transform);
    }
    locate_in(&mut branch.blocks, target, transform)
}

fn apply<F>(site: BlockMut<'_>, transform: &mut Option<F>) -> Result<(), GenError>
where
    F: FnOnce(BlockMut<'_>) -> Result<(), GenError>,
{
    match transform.take() {
        Some(f) => f(site),
        None => Ok(()),
    }
}
