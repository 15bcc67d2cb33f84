//! ISO 4217 currency table.
//!
//! Each entry becomes a named constant (`EUR`, `USD`, ...) and a row of
//! [`CURRENCIES`], which stays sorted by code.

use super::Currency;

macro_rules! currencies {
    ($($ident:ident => $numeric:literal, $digits:literal, $symbol:literal, $name:literal;)*) => {
        $(
            #[doc = concat!($name, " (", stringify!($ident), ").")]
            pub const $ident: Currency = Currency {
                code: stringify!($ident),
                numeric_code: $numeric,
                decimal_digits: $digits,
                symbol: $symbol,
                name: $name,
            };
        )*

        /// Every registered currency, ordered by code.
        pub static CURRENCIES: &[Currency] = &[$($ident),*];
    };
}

currencies! {
    AED => 784, 2, "د.إ", "UAE Dirham";
    ARS => 32, 2, "$", "Argentine Peso";
    AUD => 36, 2, "A$", "Australian Dollar";
    BGN => 975, 2, "лв", "Bulgarian Lev";
    BHD => 48, 3, "BD", "Bahraini Dinar";
    BRL => 986, 2, "R$", "Brazilian Real";
    CAD => 124, 2, "CA$", "Canadian Dollar";
    CHF => 756, 2, "CHF", "Swiss Franc";
    CLF => 990, 4, "UF", "Chilean Unit of Account";
    CLP => 152, 0, "$", "Chilean Peso";
    CNY => 156, 2, "¥", "Chinese Yuan";
    COP => 170, 2, "$", "Colombian Peso";
    CZK => 203, 2, "Kč", "Czech Koruna";
    DKK => 208, 2, "kr", "Danish Krone";
    EGP => 818, 2, "E£", "Egyptian Pound";
    EUR => 978, 2, "€", "Euro";
    GBP => 826, 2, "£", "British Pound";
    HKD => 344, 2, "HK$", "Hong Kong Dollar";
    HUF => 348, 2, "Ft", "Hungarian Forint";
    IDR => 360, 2, "Rp", "Indonesian Rupiah";
    ILS => 376, 2, "₪", "Israeli New Shekel";
    INR => 356, 2, "₹", "Indian Rupee";
    ISK => 352, 0, "kr", "Icelandic Krona";
    JOD => 400, 3, "JD", "Jordanian Dinar";
    JPY => 392, 0, "¥", "Japanese Yen";
    KRW => 410, 0, "₩", "South Korean Won";
    KWD => 414, 3, "KD", "Kuwaiti Dinar";
    MXN => 484, 2, "MX$", "Mexican Peso";
    MYR => 458, 2, "RM", "Malaysian Ringgit";
    NGN => 566, 2, "₦", "Nigerian Naira";
    NOK => 578, 2, "kr", "Norwegian Krone";
    NZD => 554, 2, "NZ$", "New Zealand Dollar";
    OMR => 512, 3, "OMR", "Omani Rial";
    PHP => 608, 2, "₱", "Philippine Peso";
    PKR => 586, 2, "₨", "Pakistani Rupee";
    PLN => 985, 2, "zł", "Polish Zloty";
    RON => 946, 2, "lei", "Romanian Leu";
    RUB => 643, 2, "₽", "Russian Ruble";
    SAR => 682, 2, "SR", "Saudi Riyal";
    SEK => 752, 2, "kr", "Swedish Krona";
    SGD => 702, 2, "S$", "Singapore Dollar";
    THB => 764, 2, "฿", "Thai Baht";
    TND => 788, 3, "DT", "Tunisian Dinar";
    TRY => 949, 2, "₺", "Turkish Lira";
    TWD => 901, 2, "NT$", "New Taiwan Dollar";
    UAH => 980, 2, "₴", "Ukrainian Hryvnia";
    USD => 840, 2, "$", "US Dollar";
    VND => 704, 0, "₫", "Vietnamese Dong";
    ZAR => 710, 2, "R", "South African Rand";
}
