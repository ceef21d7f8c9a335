pub mod matchers;
pub mod renamer;
pub mod resolver;
