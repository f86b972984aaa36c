/// Screen modules for the booking wizard
pub mod home;
pub mod success;
pub mod wizard;
