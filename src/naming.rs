use std::collections::HashSet;

use crate::blocks::{Block, FunctionInfo, VariableInfoWithIndex};
use crate::visit::{BlockCounter, walk_blocks};

/// Return-type prefix marking a call as asynchronous, e.g. `Promise<string>`.
pub const ASYNC_WRAPPER_PREFIX: &str = "Promise<";

/// Type given to values whose return type is unknown.
pub const FALLBACK_TYPE: &str = "any";

/// `base` if no variable is named that yet, otherwise the lowest free `base{N}`
/// with N starting at 2.
pub fn unique_variable_name(base: &str, variables: &[VariableInfoWithIndex]) -> String {
    unique_name_among(base, variables.iter().map(|v| v.name.as_str()))
}

/// Like [`unique_variable_name`], against any set of names already taken.
pub fn unique_name_among<'a>(base: &str, taken: impl IntoIterator<Item = &'a str>) -> String {
    let existing: HashSet<&str> = taken.into_iter().collect();
    if !existing.contains(base) {
        return base.to_string();
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{base}{counter}");
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Strip the async wrapper from a return type: `Promise<T>` becomes `T`.
/// Anything else passes through; a missing type becomes [`FALLBACK_TYPE`].
pub fn unwrap_async_type(return_type: Option<&str>) -> String {
    match return_type {
        Some(ty) => match ty
            .strip_prefix(ASYNC_WRAPPER_PREFIX)
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(inner) => inner.to_string(),
            None => ty.to_string(),
        },
        None => FALLBACK_TYPE.to_string(),
    }
}

/// Whether a return type names an async-wrapped value anywhere in it.
pub fn is_async_type(return_type: Option<&str>) -> bool {
    return_type.is_some_and(|ty| ty.contains(ASYNC_WRAPPER_PREFIX))
}

/// Number of blocks in the whole forest, counting every structural child.
/// This is the index the next created block receives.
pub fn count_all_blocks(blocks: &[Block]) -> usize {
    let mut counter = BlockCounter::default();
    walk_blocks(&mut counter, blocks);
    counter.count
}

/// Find a variable of the given type created strictly before `before_index`.
///
/// With `latest` the most recently created match wins, otherwise the earliest.
pub fn find_variable_by_type<'a>(
    variables: &'a [VariableInfoWithIndex],
    ty: &str,
    latest: bool,
    before_index: Option<usize>,
) -> Option<&'a VariableInfoWithIndex> {
    let mut candidates = variables
        .iter()
        .filter(|v| before_index.is_none_or(|bound| v.index < bound))
        .filter(|v| v.ty == ty);
    if latest {
        candidates.max_by_key(|v| v.index)
    } else {
        candidates.min_by_key(|v| v.index)
    }
}

/// Variables a list of functions would produce, indexed by their position.
pub fn extract_variables(function_infos: &[FunctionInfo]) -> Vec<VariableInfoWithIndex> {
    function_infos
        .iter()
        .enumerate()
        .map(|(index, info)| {
            VariableInfoWithIndex::new(
                info.name.to_lowercase(),
                unwrap_async_type(info.return_type.as_deref()),
                index,
            )
        })
        .collect()
}
