use serde::Serialize;

/// All localized user-facing strings for a language
///
/// Strings are stored raw. Placeholders such as `{count}` are substituted by
/// the helper methods below, never by callers doing ad-hoc replacement.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStrings {
    // ==================== Page ====================
    /// Document title of the landing page
    pub page_title: &'static str,

    // ==================== Subscribe Section ====================
    /// Heading above the waitlist form
    pub subscribe_heading: &'static str,

    /// Paragraph explaining the product is not released yet
    pub subscribe_description: &'static str,

    /// Placeholder text of the email input
    pub subscribe_placeholder: &'static str,

    /// Label of the submit button
    pub subscribe_cta: &'static str,

    /// Privacy note shown under the form
    pub subscribe_privacy: &'static str,

    /// Signup counter
    /// Placeholders: {count}
    pub subscribe_counter: &'static str,

    /// Shown after a successful join
    pub subscribe_success: &'static str,

    /// Shown when the email is already on the waitlist
    pub subscribe_already_exists: &'static str,

    /// Shown when the email fails syntax validation
    pub subscribe_invalid_email: &'static str,

    // ==================== Errors ====================
    /// Generic retry prompt for transport/service failures
    pub generic_error: &'static str,

    /// Shown when no backing store is configured
    pub service_unavailable: &'static str,

    /// Shown when the admin credential is missing or wrong
    pub admin_unauthorized: &'static str,

    // ==================== CSV Export ====================
    /// Header of the email column
    pub csv_email_header: &'static str,

    /// Header of the date column
    pub csv_date_header: &'static str,
}

impl LanguageStrings {
    /// Signup counter with `{count}` filled in
    pub fn counter(&self, count: u64) -> String {
        self.subscribe_counter.replace("{count}", &count.to_string())
    }

    /// Every field as `(name, value)`, used by the translation validator
    pub fn fields(&self) -> [(&'static str, &'static str); 15] {
        [
            ("page_title", self.page_title),
            ("subscribe_heading", self.subscribe_heading),
            ("subscribe_description", self.subscribe_description),
            ("subscribe_placeholder", self.subscribe_placeholder),
            ("subscribe_cta", self.subscribe_cta),
            ("subscribe_privacy", self.subscribe_privacy),
            ("subscribe_counter", self.subscribe_counter),
            ("subscribe_success", self.subscribe_success),
            ("subscribe_already_exists", self.subscribe_already_exists),
            ("subscribe_invalid_email", self.subscribe_invalid_email),
            ("generic_error", self.generic_error),
            ("service_unavailable", self.service_unavailable),
            ("admin_unauthorized", self.admin_unauthorized),
            ("csv_email_header", self.csv_email_header),
            ("csv_date_header", self.csv_date_header),
        ]
    }
}

// ==================== Uzbek Strings ====================

/// Uzbek language strings (canonical)
pub const UZBEK_STRINGS: LanguageStrings = LanguageStrings {
    page_title: "EazyEnglish - Ingliz tilini o'yin orqali o'rganing",

    subscribe_heading: "Birinchi bo'lib sinab ko'ring!",
    subscribe_description: "EazyEnglish hali tayyor emas. Lekin siz birinchilardan bo'lib sinab ko'rish imkoniyatiga ega bo'lishingiz mumkin.",
    subscribe_placeholder: "Email manzilingiz",
    subscribe_cta: "Kutish ro'yxatiga qo'shilish",
    subscribe_privacy: "Emailingiz hech qachon tarqatilmaydi va takroriy kiritish bloklanadi",
    subscribe_counter: "{count} kishi allaqachon ro'yxatdan o'tgan",
    subscribe_success: "Tabriklaymiz! Siz ro'yxatga qo'shildingiz!",
    subscribe_already_exists: "Bu email allaqachon ro'yxatda mavjud",
    subscribe_invalid_email: "Iltimos, to'g'ri email kiriting",

    generic_error: "Xatolik yuz berdi. Iltimos, qayta urinib ko'ring.",
    service_unavailable: "Kutish ro'yxati vaqtincha ishlamayapti",
    admin_unauthorized: "Noto'g'ri parol!",

    csv_email_header: "Email",
    csv_date_header: "Sana",
};

// ==================== English Strings ====================

/// English language strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    page_title: "EazyEnglish - Learn English through games",

    subscribe_heading: "Be the first to try it!",
    subscribe_description: "EazyEnglish isn't ready yet. But you can be among the first to try it out.",
    subscribe_placeholder: "Your email address",
    subscribe_cta: "Join the waitlist",
    subscribe_privacy: "Your email will never be shared and duplicate entries are blocked",
    subscribe_counter: "{count} people have already signed up",
    subscribe_success: "Congratulations! You've been added to the waitlist!",
    subscribe_already_exists: "This email is already on the waitlist",
    subscribe_invalid_email: "Please enter a valid email",

    generic_error: "Something went wrong. Please try again.",
    service_unavailable: "The waitlist is temporarily unavailable",
    admin_unauthorized: "Incorrect password!",

    csv_email_header: "Email",
    csv_date_header: "Date",
};

// ==================== Russian Strings ====================

/// Russian language strings
pub const RUSSIAN_STRINGS: LanguageStrings = LanguageStrings {
    page_title: "EazyEnglish - Учите английский через игры",

    subscribe_heading: "Будьте первыми!",
    subscribe_description: "EazyEnglish ещё не готов. Но вы можете быть среди первых, кто его попробует.",
    subscribe_placeholder: "Ваш email",
    subscribe_cta: "Записаться в лист ожидания",
    subscribe_privacy: "Ваш email никогда не будет передан третьим лицам, повторная запись блокируется",
    subscribe_counter: "{count} человек уже записались",
    subscribe_success: "Поздравляем! Вы добавлены в лист ожидания!",
    subscribe_already_exists: "Этот email уже в листе ожидания",
    subscribe_invalid_email: "Пожалуйста, введите корректный email",

    generic_error: "Что-то пошло не так. Пожалуйста, попробуйте ещё раз.",
    service_unavailable: "Лист ожидания временно недоступен",
    admin_unauthorized: "Неверный пароль!",

    csv_email_header: "Email",
    csv_date_header: "Дата",
};
