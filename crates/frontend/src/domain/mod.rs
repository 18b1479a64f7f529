pub mod response;
pub mod upstream;
pub mod validator;
