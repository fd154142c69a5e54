pub mod booking;
pub mod session;
pub mod telegram;

pub use booking::Booking;
pub use session::{FormSession, IntakeState};
pub use telegram::{
    CallbackQuery, Chat, InlineKeyboard, InlineKeyboardButton, TgMessage, TgUser, Update,
};
