pub mod callback_data;
pub mod logging;
