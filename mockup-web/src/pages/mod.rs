mod builder;

pub use builder::BuilderPage;
