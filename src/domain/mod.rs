pub mod otp;
pub mod shared;
