pub mod login;
pub mod signup;

pub use login::UserLoginDto;
pub use signup::UserSignupDto;
