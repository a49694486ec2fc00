//! Transform-chain assembly for the two TypeScript rule types

mod builder;
mod rule;
pub mod stage;

pub use builder::{
    COMPONENT_SUFFIX_PATTERN, ChainOutput, TS_TEST_PATTERN, TSX_TEST_PATTERN,
    TransformChainBuilder, TypeCheck,
};
pub use rule::RuleDescriptor;
pub use stage::StageDescriptor;
