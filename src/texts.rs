//! All user-facing texts of the bot, in one place.

pub const WELCOME: &str = "👋 Здравствуйте!\n\
Добро пожаловать в наш уютный частный детский сад в Некрасовке 🌿\n\n\
🎉 Приглашаем вас и вашего малыша на День открытых дверей!\n\
📅 25 октября 2025 г. (суббота)\n\
🕙 Начало в 10:00\n\
📍 г. Москва, ул. Маршала Еременко, д. 5, корп. 5\n\n\
ПРОГРАММА СТРОГО ДЛЯ ДЕТЕЙ ОТ 1,5 ДО 5 ЛЕТ!\n\n\
✨ Программа мероприятия:\n\
10:00 — Приветствие и открытие\n\
10:30 — Спектакль кукольного театра 🎭\n\
10:40 — Мастер-класс по лечебной физкультуре + детский психолог🤸‍♀️\n\
11:00 — Розыгрыш призов\n\n\
💛 Вся программа бесплатная!\n\
Хотите записаться на участие?\n\
👉 Нажмите кнопку «Записаться», и мы закрепим за вами место.";

pub const SIGNUP_BUTTON: &str = "✅ Записаться";
pub const CONFIRM_BUTTON: &str = "✅ Подтвердить";
pub const CANCEL_BUTTON: &str = "❌ Отмена";

pub const ASK_NAME: &str = "Введите ФИО родителя (как обращаться):";
pub const BAD_NAME: &str = "Пожалуйста, укажите корректное имя.";
pub const ASK_PHONE: &str = "Укажите телефон для связи (например, +7 999 123-45-67):";
pub const BAD_PHONE: &str = "Не удалось распознать номер. Пришлите в формате +7XXXXXXXXXX";
pub const ALREADY_BOOKED: &str =
    "Этим номером уже оформлена запись. Укажите другой номер или свяжитесь с администратором.";
pub const ASK_AGE: &str = "Возраст ребёнка (например, 3 года 4 месяца):";
pub const BAD_AGE: &str = "Пожалуйста, укажите возраст ребёнка.";
pub const CANCELLED: &str = "Запись отменена. Если передумаете — нажмите /start";
pub const CONFIRM_FAILED: &str =
    "Не получилось сохранить запись. Нажмите /start, чтобы попробовать ещё раз.";
pub const PONG: &str = "pong";
pub const EXPORT_CAPTION: &str = "Экспорт записей";

pub fn review(parent: &str, phone: &str, child_age: &str) -> String {
    format!(
        "Проверьте данные:\n\n\
         Родитель: {parent}\n\
         Телефон: {phone}\n\
         Возраст ребёнка: {child_age}\n\n\
         Подтвердить запись?"
    )
}

pub fn confirmed(code: &str) -> String {
    format!(
        "Готово! Ваша запись подтверждена. ✅\n\
         Ваш персональный номер участника: {code}\n\n\
         Дата мероприятия: 25.10.2025 (суббота)\n\
         Встречаемся к 10:00 по адресу:\n\
         г. Москва, ул. Маршала Еременко, д. 5, корп. 5\n\n\
         Сохраните этот номер — по нему вы будете участвовать в розыгрыше призов. До встречи!"
    )
}

pub fn admin_notification(code: &str, parent: &str, phone: &str, child_age: &str, created_at: &str) -> String {
    format!(
        "🆕 Новая запись на День открытых дверей\n\
         Код: {code}\n\
         Родитель: {parent}\n\
         Телефон: {phone}\n\
         Возраст ребёнка: {child_age}\n\
         Создано: {created_at}"
    )
}

pub fn total_count(total: i64) -> String {
    format!("📊 Всего записавшихся: {total}")
}
