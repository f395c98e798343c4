pub mod fetch_hook;
pub mod toast;
