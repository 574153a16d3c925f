//! Checkout display locale.

/// Locale used to render the hosted checkout UI.
///
/// `Auto` lets the provider pick from the customer's browser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum CheckoutLocale {
    #[default]
    Auto,
    Bg,
    Cs,
    Da,
    De,
    El,
    En,
    EnGb,
    Es,
    Es419,
    Et,
    Fi,
    Fil,
    Fr,
    FrCa,
    Hr,
    Hu,
    Id,
    It,
    Ja,
    Ko,
    Lt,
    Lv,
    Ms,
    Mt,
    Nb,
    Nl,
    Pl,
    PtBr,
    Pt,
    Ro,
    Ru,
    Sk,
    Sl,
    Sv,
    Th,
    Tr,
    Vi,
    Zh,
    ZhHk,
    ZhTw,
}

impl CheckoutLocale {
    /// The wire value the provider API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutLocale::Auto => "auto",
            CheckoutLocale::Bg => "bg",
            CheckoutLocale::Cs => "cs",
            CheckoutLocale::Da => "da",
            CheckoutLocale::De => "de",
            CheckoutLocale::El => "el",
            CheckoutLocale::En => "en",
            CheckoutLocale::EnGb => "en-GB",
            CheckoutLocale::Es => "es",
            CheckoutLocale::Es419 => "es-419",
            CheckoutLocale::Et => "et",
            CheckoutLocale::Fi => "fi",
            CheckoutLocale::Fil => "fil",
            CheckoutLocale::Fr => "fr",
            CheckoutLocale::FrCa => "fr-CA",
            CheckoutLocale::Hr => "hr",
            CheckoutLocale::Hu => "hu",
            CheckoutLocale::Id => "id",
            CheckoutLocale::It => "it",
            CheckoutLocale::Ja => "ja",
            CheckoutLocale::Ko => "ko",
            CheckoutLocale::Lt => "lt",
            CheckoutLocale::Lv => "lv",
            CheckoutLocale::Ms => "ms",
            CheckoutLocale::Mt => "mt",
            CheckoutLocale::Nb => "nb",
            CheckoutLocale::Nl => "nl",
            CheckoutLocale::Pl => "pl",
            CheckoutLocale::PtBr => "pt-BR",
            CheckoutLocale::Pt => "pt",
            CheckoutLocale::Ro => "ro",
            CheckoutLocale::Ru => "ru",
            CheckoutLocale::Sk => "sk",
            CheckoutLocale::Sl => "sl",
            CheckoutLocale::Sv => "sv",
            CheckoutLocale::Th => "th",
            CheckoutLocale::Tr => "tr",
            CheckoutLocale::Vi => "vi",
            CheckoutLocale::Zh => "zh",
            CheckoutLocale::ZhHk => "zh-HK",
            CheckoutLocale::ZhTw => "zh-TW",
        }
    }
}
