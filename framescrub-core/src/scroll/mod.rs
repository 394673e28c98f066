pub mod mapper;
pub mod resolver;
