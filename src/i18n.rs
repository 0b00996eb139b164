//! Per-locale message tables. Every user-facing string lives here so the
//! components stay identical across the Arabic and English pages.

pub struct ServiceText {
    pub key: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
}

pub struct TimeSlot {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct StatText {
    pub target: u64,
    pub label: &'static str,
}

pub struct NavText {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub struct Messages {
    pub site_name: &'static str,
    pub loading: &'static str,
    pub menu: &'static str,
    pub nav: &'static [NavText],
    pub sign_in: &'static str,
    pub other_language: &'static str,

    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,

    pub services_title: &'static str,
    pub services_subtitle: &'static str,
    pub services: &'static [ServiceText],
    pub book_now: &'static str,

    pub features_title: &'static str,
    pub features: &'static [&'static str],

    pub stats: &'static [StatText],

    pub booking_title: &'static str,
    pub booking_subtitle: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_phone: &'static str,
    pub placeholder_address: &'static str,
    pub choose_service: &'static str,
    pub choose_time: &'static str,
    pub time_slots: &'static [TimeSlot],
    pub price_caption: &'static str,
    pub submit: &'static str,

    pub label_name: &'static str,
    pub label_phone: &'static str,
    pub label_service: &'static str,
    pub label_price: &'static str,
    pub label_date: &'static str,
    pub label_time: &'static str,
    pub label_address: &'static str,
    pub currency: &'static str,
    pub modal_title: &'static str,
    pub modal_hint: &'static str,
    pub modal_close: &'static str,

    pub referral_title: &'static str,
    pub referral_body: &'static str,
    pub referral_link: &'static str,
    pub referral_send: &'static str,
    pub copy_success: &'static str,
    pub copy_failure: &'static str,

    pub map_title: &'static str,

    pub theme_to_light: &'static str,
    pub theme_to_dark: &'static str,
    pub scroll_top: &'static str,

    pub auth_title: &'static str,
    pub auth_providers: &'static [&'static str],
    pub auth_continue_with: &'static str,
    pub auth_success: fn(&str) -> String,
}

impl Messages {
    pub fn service_label(&self, key: &str) -> Option<&'static str> {
        self.services.iter().find(|s| s.key == key).map(|s| s.label)
    }

    pub fn time_label(&self, value: &str) -> Option<&'static str> {
        self.time_slots
            .iter()
            .find(|slot| slot.value == value)
            .map(|slot| slot.label)
    }
}

const TIME_SLOTS_EN: &[TimeSlot] = &[
    TimeSlot { value: "09:00", label: "9:00 AM" },
    TimeSlot { value: "10:00", label: "10:00 AM" },
    TimeSlot { value: "12:00", label: "12:00 PM" },
    TimeSlot { value: "14:00", label: "2:00 PM" },
    TimeSlot { value: "16:00", label: "4:00 PM" },
];

const TIME_SLOTS_AR: &[TimeSlot] = &[
    TimeSlot { value: "09:00", label: "9:00 صباحًا" },
    TimeSlot { value: "10:00", label: "10:00 صباحًا" },
    TimeSlot { value: "12:00", label: "12:00 ظهرًا" },
    TimeSlot { value: "14:00", label: "2:00 مساءً" },
    TimeSlot { value: "16:00", label: "4:00 مساءً" },
];

fn auth_success_en(provider: &str) -> String {
    format!("Signed up with {} successfully", provider)
}

fn auth_success_ar(provider: &str) -> String {
    format!("تم التسجيل عبر {} بنجاح", provider)
}

pub static ENGLISH: Messages = Messages {
    site_name: "Tidy Home",
    loading: "Loading…",
    menu: "Menu",
    nav: &[
        NavText { anchor: "#home", label: "Home" },
        NavText { anchor: "#services", label: "Services" },
        NavText { anchor: "#booking", label: "Booking" },
        NavText { anchor: "#referral", label: "Invite" },
        NavText { anchor: "#map", label: "Location" },
    ],
    sign_in: "Sign in",
    other_language: "العربية",

    hero_title: "A spotless home, without lifting a finger",
    hero_subtitle: "Professional cleaning for houses, apartments and carpets.",
    hero_cta: "Book a cleaning",

    services_title: "Our services",
    services_subtitle: "Pick what fits your home. Prices are fixed, no surprises.",
    services: &[
        ServiceText { key: "house", label: "House cleaning", blurb: "Full clean of every room, kitchen and bathrooms." },
        ServiceText { key: "apartment", label: "Apartment cleaning", blurb: "Deep clean sized for apartments." },
        ServiceText { key: "carpet", label: "Carpet cleaning", blurb: "Steam washing and stain removal." },
    ],
    book_now: "Book now",

    features_title: "Why choose us",
    features: &[
        "Trained and vetted staff",
        "Eco-friendly products",
        "On-time, every time",
        "Satisfaction guaranteed",
    ],

    stats: &[
        StatText { target: 1500, label: "Homes cleaned" },
        StatText { target: 320, label: "Carpets refreshed" },
        StatText { target: 98, label: "% happy customers" },
    ],

    booking_title: "Book your cleaning",
    booking_subtitle: "Fill in the form and we'll confirm your visit.",
    placeholder_name: "Full name",
    placeholder_phone: "Phone number",
    placeholder_address: "Address",
    choose_service: "Choose a service",
    choose_time: "Choose a time",
    time_slots: TIME_SLOTS_EN,
    price_caption: "Price (LYD):",
    submit: "Confirm booking",

    label_name: "Name:",
    label_phone: "Phone:",
    label_service: "Service:",
    label_price: "Price:",
    label_date: "Date:",
    label_time: "Time:",
    label_address: "Address:",
    currency: "LYD",
    modal_title: "Booking received",
    modal_hint: "💡 You can create an account later to track your bookings and get discounts.",
    modal_close: "Close",

    referral_title: "Invite a friend",
    referral_body: "Share your link and both of you get a discount on the next cleaning.",
    referral_link: "https://tidyhome.ly/invite/TH-2024",
    referral_send: "Copy invite link",
    copy_success: "Referral link copied successfully",
    copy_failure: "Could not copy the link. Please copy it manually",

    map_title: "Find us",

    theme_to_light: "Light mode",
    theme_to_dark: "Dark mode",
    scroll_top: "Back to top",

    auth_title: "Create your account",
    auth_providers: &["Google", "Apple", "Facebook"],
    auth_continue_with: "Continue with",
    auth_success: auth_success_en,
};

pub static ARABIC: Messages = Messages {
    site_name: "بيت نظيف",
    loading: "جارِ التحميل…",
    menu: "القائمة",
    nav: &[
        NavText { anchor: "#home", label: "الرئيسية" },
        NavText { anchor: "#services", label: "الخدمات" },
        NavText { anchor: "#booking", label: "الحجز" },
        NavText { anchor: "#referral", label: "ادعُ صديقًا" },
        NavText { anchor: "#map", label: "موقعنا" },
    ],
    sign_in: "تسجيل الدخول",
    other_language: "English",

    hero_title: "بيت نظيف دون أي عناء",
    hero_subtitle: "تنظيف احترافي للمنازل والشقق والسجاد.",
    hero_cta: "احجز الآن",

    services_title: "خدماتنا",
    services_subtitle: "اختر ما يناسب بيتك. الأسعار ثابتة بدون مفاجآت.",
    services: &[
        ServiceText { key: "house", label: "تنظيف منزل", blurb: "تنظيف شامل لكل الغرف والمطبخ ودورات المياه." },
        ServiceText { key: "apartment", label: "تنظيف شقة", blurb: "تنظيف عميق مناسب للشقق." },
        ServiceText { key: "carpet", label: "تنظيف سجاد", blurb: "غسيل بالبخار وإزالة البقع." },
    ],
    book_now: "احجز الآن",

    features_title: "لماذا نحن",
    features: &[
        "فريق مدرَّب وموثوق",
        "منتجات صديقة للبيئة",
        "التزام بالمواعيد",
        "رضاك مضمون",
    ],

    stats: &[
        StatText { target: 1500, label: "منزل تم تنظيفه" },
        StatText { target: 320, label: "سجادة تم غسلها" },
        StatText { target: 98, label: "٪ عملاء راضون" },
    ],

    booking_title: "احجز موعد التنظيف",
    booking_subtitle: "املأ النموذج وسنؤكد زيارتك.",
    placeholder_name: "الاسم الكامل",
    placeholder_phone: "رقم الهاتف",
    placeholder_address: "العنوان",
    choose_service: "اختر الخدمة",
    choose_time: "اختر الوقت",
    time_slots: TIME_SLOTS_AR,
    price_caption: "السعر (د.ل):",
    submit: "تأكيد الحجز",

    label_name: "الاسم:",
    label_phone: "الهاتف:",
    label_service: "الخدمة:",
    label_price: "السعر:",
    label_date: "التاريخ:",
    label_time: "الوقت:",
    label_address: "العنوان:",
    currency: "د.ل",
    modal_title: "تم استلام طلبك",
    modal_hint: "💡 يمكنك إنشاء حساب لاحقًا لمتابعة طلباتك والحصول على خصومات.",
    modal_close: "إغلاق",

    referral_title: "ادعُ صديقًا",
    referral_body: "شارك رابطك واحصلا معًا على خصم في التنظيف القادم.",
    referral_link: "https://tidyhome.ly/invite/TH-2024",
    referral_send: "نسخ رابط الدعوة",
    copy_success: "تم نسخ رابط الدعوة بنجاح",
    copy_failure: "تعذر نسخ الرابط، انسخه يدويًا",

    map_title: "موقعنا",

    theme_to_light: "الوضع الفاتح",
    theme_to_dark: "الوضع الداكن",
    scroll_top: "العودة للأعلى",

    auth_title: "أنشئ حسابك",
    auth_providers: &["Google", "Apple", "Facebook"],
    auth_continue_with: "المتابعة عبر",
    auth_success: auth_success_ar,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tables_label_every_catalog_service() {
        for messages in [&ENGLISH, &ARABIC] {
            for key in ["house", "apartment", "carpet"] {
                assert!(messages.service_label(key).is_some(), "missing label for {key}");
            }
            assert_eq!(messages.service_label("garage"), None);
        }
    }

    #[test]
    fn time_slots_resolve_by_value() {
        assert_eq!(ENGLISH.time_label("10:00"), Some("10:00 AM"));
        assert_eq!(ENGLISH.time_label(""), None);
        assert_eq!(ARABIC.time_slots.len(), ENGLISH.time_slots.len());
    }

    #[test]
    fn auth_message_names_the_provider() {
        assert_eq!((ENGLISH.auth_success)("Google"), "Signed up with Google successfully");
        assert!((ARABIC.auth_success)("Apple").contains("Apple"));
    }
}
