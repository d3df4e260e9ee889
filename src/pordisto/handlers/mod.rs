pub mod health;
pub use self::health::health;

pub mod register;
pub use self::register::register;

pub mod login;
pub use self::login::login;
