pub mod blocks;
pub mod diagnostics;
pub mod visit;
pub mod naming;
pub mod locate;
pub mod build;
pub mod codegen;
pub mod pretty;
pub mod tree;
pub mod config;
pub mod session;

pub use blocks::{
    Block, BlockAndState, BlockRef, BlockType, CodeGeneratorState, Commented, ElseBlock, ElseIfBlock,
    FunctionCallBlock, FunctionInfo, IfBlock, VariableInfo, VariableInfoWithIndex, WhileLoopBlock,
};
pub use build::{create_function_call_block, create_if_block, create_while_block};
pub use codegen::{generate_code, generate_code_from_blocks, synthesize};
pub use config::GeneratorConfig;
pub use diagnostics::GenError;

/// Render a whole session with the default configuration.
pub fn generate_session(state: &CodeGeneratorState) -> Result<String, GenError> {
    generate_code(&state.blocks, state, &GeneratorConfig::default())
}
