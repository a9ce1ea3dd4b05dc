//! Built-in ISO 4217 currency table.
//!
//! Official and active ISO 4217 currencies as of August 29, 2018, extended by
//! display symbols that are not part of the standard.

use crate::currency::{Currency, CurrencyRef};
use crate::registry::CurrencyRegistry;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Name of the ISO 4217 standard.
pub const STANDARD: &str = "ISO4217";

/// Offset added to the numeric code to form the unique ID.
pub const UNIQUE_ID_OFFSET: i32 = 42_170_000;

/// A currency according to the ISO 4217 standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso4217Currency {
    alphabetic_code: &'static str,
    numeric_code: i32,
    symbol: &'static str,
    narrow_symbol: &'static str,
    /// Minor unit. `None` if the currency has no smallest unit.
    decimal_places: Option<u32>,
    name: &'static str,
}

impl Iso4217Currency {
    const fn new(
        alphabetic_code: &'static str,
        numeric_code: i32,
        symbol: &'static str,
        narrow_symbol: &'static str,
        decimal_places: Option<u32>,
        name: &'static str,
    ) -> Self {
        Iso4217Currency {
            alphabetic_code,
            numeric_code,
            symbol,
            narrow_symbol,
            decimal_places,
            name,
        }
    }

    /// Official three digit numeric code.
    pub fn numeric_code(&self) -> i32 {
        self.numeric_code
    }

    /// Number of decimal places of the minor unit, if there is one.
    pub fn decimal_places(&self) -> Option<u32> {
        self.decimal_places
    }
}

impl Currency for Iso4217Currency {
    fn name(&self) -> &str {
        self.name
    }

    fn standard(&self) -> &str {
        STANDARD
    }

    fn unique_id(&self) -> i32 {
        UNIQUE_ID_OFFSET + self.numeric_code
    }

    fn code(&self) -> &str {
        self.alphabetic_code
    }

    /// Falls back to the alphabetic code if the table has no symbol.
    fn symbol(&self) -> &str {
        if self.symbol.is_empty() {
            self.alphabetic_code
        } else {
            self.symbol
        }
    }

    fn narrow_symbol(&self) -> &str {
        if self.narrow_symbol.is_empty() {
            self.symbol()
        } else {
            self.narrow_symbol
        }
    }

    fn smallest_unit(&self) -> Option<Decimal> {
        self.decimal_places.map(|places| Decimal::new(1, places))
    }
}

/// Shared instances of every table entry, in table order.
static CURRENCIES: Lazy<Vec<CurrencyRef>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|c| Arc::new(c.clone()) as CurrencyRef)
        .collect()
});

/// Registry limited to ISO 4217, which also supports lookups by plain code.
static REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(|| {
    CurrencyRegistry::must_with_currencies(
        STANDARD,
        Some(STANDARD),
        table().iter().cloned(),
    )
});

/// All built-in ISO 4217 currencies.
pub fn table() -> &'static [CurrencyRef] {
    &CURRENCIES
}

/// The registry of built-in ISO 4217 currencies.
pub fn registry() -> &'static CurrencyRegistry {
    &REGISTRY
}

const TABLE: &[Iso4217Currency] = &[
    Iso4217Currency::new("AFN", 971, "؋", "", Some(2), "Afghani"),
    Iso4217Currency::new("EUR", 978, "€", "", Some(2), "Euro"),
    Iso4217Currency::new("ALL", 8, "L", "", Some(2), "Lek"),
    Iso4217Currency::new("DZD", 12, "DA", "", Some(2), "Algerian Dinar"),
    Iso4217Currency::new("USD", 840, "US$", "$", Some(2), "US Dollar"),
    Iso4217Currency::new("AOA", 973, "Kz", "", Some(2), "Kwanza"),
    Iso4217Currency::new("XCD", 951, "EC$", "$", Some(2), "East Caribbean Dollar"),
    Iso4217Currency::new("ARS", 32, "$", "", Some(2), "Argentine Peso"),
    Iso4217Currency::new("AMD", 51, "֏", "", Some(2), "Armenian Dram"),
    Iso4217Currency::new("AWG", 533, "ƒ", "", Some(2), "Aruban Florin"),
    Iso4217Currency::new("AUD", 36, "AU$", "$", Some(2), "Australian Dollar"),
    Iso4217Currency::new("AZN", 944, "₼", "", Some(2), "Azerbaijan Manat"),
    Iso4217Currency::new("BSD", 44, "B$", "$", Some(2), "Bahamian Dollar"),
    Iso4217Currency::new("BHD", 48, "BD", "", Some(3), "Bahraini Dinar"),
    Iso4217Currency::new("BDT", 50, "৳", "", Some(2), "Taka"),
    Iso4217Currency::new("BBD", 52, "Bds$", "$", Some(2), "Barbados Dollar"),
    Iso4217Currency::new("BYN", 933, "Br", "", Some(2), "Belarusian Ruble"),
    Iso4217Currency::new("BZD", 84, "BZ$", "$", Some(2), "Belize Dollar"),
    Iso4217Currency::new("XOF", 952, "CFA", "Fr", Some(0), "CFA Franc BCEAO"),
    Iso4217Currency::new("BMD", 60, "BD$", "$", Some(2), "Bermudian Dollar"),
    Iso4217Currency::new("INR", 356, "₹", "", Some(2), "Indian Rupee"),
    Iso4217Currency::new("BTN", 64, "Nu.", "", Some(2), "Ngultrum"),
    Iso4217Currency::new("BOB", 68, "Bs.", "", Some(2), "Boliviano"),
    Iso4217Currency::new("BOV", 984, "", "", Some(2), "Mvdol"),
    Iso4217Currency::new("BAM", 977, "KM", "", Some(2), "Convertible Mark"),
    Iso4217Currency::new("BWP", 72, "P", "", Some(2), "Pula"),
    Iso4217Currency::new("NOK", 578, "kr", "", Some(2), "Norwegian Krone"),
    Iso4217Currency::new("BRL", 986, "R$", "", Some(2), "Brazilian Real"),
    Iso4217Currency::new("BND", 96, "B$", "$", Some(2), "Brunei Dollar"),
    Iso4217Currency::new("BGN", 975, "лв.", "", Some(2), "Bulgarian Lev"),
    Iso4217Currency::new("BIF", 108, "FBu", "", Some(0), "Burundi Franc"),
    Iso4217Currency::new("CVE", 132, "Esc", "", Some(2), "Cabo Verde Escudo"),
    Iso4217Currency::new("KHR", 116, "៛", "", Some(2), "Riel"),
    Iso4217Currency::new("XAF", 950, "CFA", "Fr", Some(0), "CFA Franc BEAC"),
    Iso4217Currency::new("CAD", 124, "CA$", "$", Some(2), "Canadian Dollar"),
    Iso4217Currency::new("KYD", 136, "KY$", "", Some(2), "Cayman Islands Dollar"),
    Iso4217Currency::new("CLP", 152, "CLP$", "$", Some(0), "Chilean Peso"),
    Iso4217Currency::new("CLF", 990, "", "", Some(4), "Unidad de Fomento"),
    Iso4217Currency::new("CNY", 156, "¥", "", Some(2), "Yuan Renminbi"),
    Iso4217Currency::new("COP", 170, "Col$", "$", Some(2), "Colombian Peso"),
    Iso4217Currency::new("COU", 970, "", "", Some(2), "Unidad de Valor Real"),
    Iso4217Currency::new("KMF", 174, "CF", "Fr", Some(0), "Comorian Franc "),
    Iso4217Currency::new("CDF", 976, "F", "", Some(2), "Congolese Franc"),
    Iso4217Currency::new("NZD", 554, "NZ$", "$", Some(2), "New Zealand Dollar"),
    Iso4217Currency::new("CRC", 188, "₡", "", Some(2), "Costa Rican Colon"),
    Iso4217Currency::new("HRK", 191, "kn", "", Some(2), "Kuna"),
    Iso4217Currency::new("CUP", 192, "₱", "", Some(2), "Cuban Peso"),
    Iso4217Currency::new("CUC", 931, "$", "", Some(2), "Peso Convertible"),
    Iso4217Currency::new("ANG", 532, "NAƒ", "", Some(2), "Netherlands Antillean Guilder"),
    Iso4217Currency::new("CZK", 203, "Kč", "", Some(2), "Czech Koruna"),
    Iso4217Currency::new("DKK", 208, "Kr", "", Some(2), "Danish Krone"),
    Iso4217Currency::new("DJF", 262, "Fdj", "", Some(0), "Djibouti Franc"),
    Iso4217Currency::new("DOP", 214, "RD$", "$", Some(2), "Dominican Peso"),
    Iso4217Currency::new("EGP", 818, "E£", "£", Some(2), "Egyptian Pound"),
    Iso4217Currency::new("SVC", 222, "", "", Some(2), "El Salvador Colon"),
    Iso4217Currency::new("ERN", 232, "Nkf", "", Some(2), "Nakfa"),
    Iso4217Currency::new("SZL", 748, "L", "", Some(2), "Lilangeni"),
    Iso4217Currency::new("ETB", 230, "Br", "", Some(2), "Ethiopian Birr"),
    Iso4217Currency::new("FKP", 238, "£", "", Some(2), "Falkland Islands Pound"),
    Iso4217Currency::new("FJD", 242, "FJ$", "$", Some(2), "Fiji Dollar"),
    Iso4217Currency::new("XPF", 953, "₣", "", Some(0), "CFP Franc"),
    Iso4217Currency::new("GMD", 270, "D", "", Some(2), "Dalasi"),
    Iso4217Currency::new("GEL", 981, "₾", "", Some(2), "Lari"),
    Iso4217Currency::new("GHS", 936, "₵", "", Some(2), "Ghana Cedi"),
    Iso4217Currency::new("GIP", 292, "£", "", Some(2), "Gibraltar Pound"),
    Iso4217Currency::new("GTQ", 320, "Q", "", Some(2), "Quetzal"),
    Iso4217Currency::new("GBP", 826, "£", "", Some(2), "Pound Sterling"),
    Iso4217Currency::new("GNF", 324, "FG", "", Some(0), "Guinean Franc"),
    Iso4217Currency::new("GYD", 328, "GY$", "", Some(2), "Guyana Dollar"),
    Iso4217Currency::new("HTG", 332, "G", "", Some(2), "Gourde"),
    Iso4217Currency::new("HNL", 340, "L", "", Some(2), "Lempira"),
    Iso4217Currency::new("HKD", 344, "HK$", "", Some(2), "Hong Kong Dollar"),
    Iso4217Currency::new("HUF", 348, "Ft", "", Some(2), "Forint"),
    Iso4217Currency::new("ISK", 352, "kr", "", Some(0), "Iceland Krona"),
    Iso4217Currency::new("IDR", 360, "Rp", "", Some(2), "Rupiah"),
    Iso4217Currency::new("XDR", 960, "SDR", "", None, "SDR (Special Drawing Right)"),
    Iso4217Currency::new("IRR", 364, "﷼", "", Some(2), "Iranian Rial"),
    Iso4217Currency::new("IQD", 368, "د.ع", "", Some(3), "Iraqi Dinar"),
    Iso4217Currency::new("ILS", 376, "₪", "", Some(2), "New Israeli Sheqel"),
    Iso4217Currency::new("JMD", 388, "J$", "", Some(2), "Jamaican Dollar"),
    Iso4217Currency::new("JPY", 392, "¥", "", Some(0), "Yen"),
    Iso4217Currency::new("JOD", 400, "د.أ", "", Some(3), "Jordanian Dinar"),
    Iso4217Currency::new("KZT", 398, "₸", "", Some(2), "Tenge"),
    Iso4217Currency::new("KES", 404, "KSh", "Sh", Some(2), "Kenyan Shilling"),
    Iso4217Currency::new("KPW", 408, "₩", "", Some(2), "North Korean Won"),
    Iso4217Currency::new("KRW", 410, "₩", "", Some(0), "Won"),
    Iso4217Currency::new("KWD", 414, "KD", "", Some(3), "Kuwaiti Dinar"),
    Iso4217Currency::new("KGS", 417, "⃀", "", Some(2), "Som"),
    Iso4217Currency::new("LAK", 418, "₭", "", Some(2), "Lao Kip"),
    Iso4217Currency::new("LBP", 422, "ل.ل", "", Some(2), "Lebanese Pound"),
    Iso4217Currency::new("LSL", 426, "L", "", Some(2), "Loti"),
    Iso4217Currency::new("ZAR", 710, "R", "", Some(2), "Rand"),
    Iso4217Currency::new("LRD", 430, "LD$", "$", Some(2), "Liberian Dollar"),
    Iso4217Currency::new("LYD", 434, "ل.د", "", Some(3), "Libyan Dinar"),
    Iso4217Currency::new("CHF", 756, "Fr.", "", Some(2), "Swiss Franc"),
    Iso4217Currency::new("MOP", 446, "MOP$", "", Some(2), "Pataca"),
    Iso4217Currency::new("MKD", 807, "ден", "", Some(2), "Denar"),
    Iso4217Currency::new("MGA", 969, "Ar", "", Some(2), "Malagasy Ariary"),
    Iso4217Currency::new("MWK", 454, "MK", "", Some(2), "Malawi Kwacha"),
    Iso4217Currency::new("MYR", 458, "RM", "", Some(2), "Malaysian Ringgit"),
    Iso4217Currency::new("MVR", 462, "Rf", "", Some(2), "Rufiyaa"),
    Iso4217Currency::new("MRU", 929, "UM", "", Some(2), "Ouguiya"),
    Iso4217Currency::new("MUR", 480, "Rs", "", Some(2), "Mauritius Rupee"),
    Iso4217Currency::new("XUA", 965, "", "", None, "ADB Unit of Account"),
    Iso4217Currency::new("MXN", 484, "$", "", Some(2), "Mexican Peso"),
    Iso4217Currency::new("MXV", 979, "", "", Some(2), "Mexican Unidad de Inversion (UDI)"),
    Iso4217Currency::new("MDL", 498, "L", "", Some(2), "Moldovan Leu"),
    Iso4217Currency::new("MNT", 496, "₮", "", Some(2), "Tugrik"),
    Iso4217Currency::new("MAD", 504, "DH", "", Some(2), "Moroccan Dirham"),
    Iso4217Currency::new("MZN", 943, "MT", "", Some(2), "Mozambique Metical"),
    Iso4217Currency::new("MMK", 104, "K", "", Some(2), "Kyat"),
    Iso4217Currency::new("NAD", 516, "N$", "", Some(2), "Namibia Dollar"),
    Iso4217Currency::new("NPR", 524, "NRs", "", Some(2), "Nepalese Rupee"),
    Iso4217Currency::new("NIO", 558, "C$", "", Some(2), "Cordoba Oro"),
    Iso4217Currency::new("NGN", 566, "₦", "", Some(2), "Naira"),
    Iso4217Currency::new("OMR", 512, "ر.ع.", "", Some(3), "Rial Omani"),
    Iso4217Currency::new("PKR", 586, "Rs.", "", Some(2), "Pakistan Rupee"),
    Iso4217Currency::new("PAB", 590, "B./", "", Some(2), "Balboa"),
    Iso4217Currency::new("PGK", 598, "K", "", Some(2), "Kina"),
    Iso4217Currency::new("PYG", 600, "₲", "", Some(0), "Guarani"),
    Iso4217Currency::new("PEN", 604, "S/.", "", Some(2), "Sol"),
    Iso4217Currency::new("PHP", 608, "₱", "", Some(2), "Philippine Peso"),
    Iso4217Currency::new("PLN", 985, "zł", "", Some(2), "Zloty"),
    Iso4217Currency::new("QAR", 634, "QR", "", Some(2), "Qatari Rial"),
    Iso4217Currency::new("RON", 946, "L", "", Some(2), "Romanian Leu"),
    Iso4217Currency::new("RUB", 643, "R", "", Some(2), "Russian Ruble"),
    Iso4217Currency::new("RWF", 646, "RF", "", Some(0), "Rwanda Franc"),
    Iso4217Currency::new("SHP", 654, "£", "", Some(2), "Saint Helena Pound"),
    Iso4217Currency::new("WST", 882, "WS$", "", Some(2), "Tala"),
    Iso4217Currency::new("STN", 930, "Db", "", Some(2), "Dobra"),
    Iso4217Currency::new("SAR", 682, "SR", "", Some(2), "Saudi Riyal"),
    Iso4217Currency::new("RSD", 941, "din.", "", Some(2), "Serbian Dinar"),
    Iso4217Currency::new("SCR", 690, "SR", "", Some(2), "Seychelles Rupee"),
    Iso4217Currency::new("SLL", 694, "Le", "", Some(2), "Leone"),
    Iso4217Currency::new("SGD", 702, "S$", "", Some(2), "Singapore Dollar"),
    Iso4217Currency::new("XSU", 994, "", "", None, "Sucre"),
    Iso4217Currency::new("SBD", 90, "SI$", "", Some(2), "Solomon Islands Dollar"),
    Iso4217Currency::new("SOS", 706, "Sh.", "", Some(2), "Somali Shilling"),
    Iso4217Currency::new("SSP", 728, "SS£", "", Some(2), "South Sudanese Pound"),
    Iso4217Currency::new("LKR", 144, "Rs", "", Some(2), "Sri Lanka Rupee"),
    Iso4217Currency::new("SDG", 938, "£SD", "", Some(2), "Sudanese Pound"),
    Iso4217Currency::new("SRD", 968, "$", "", Some(2), "Surinam Dollar"),
    Iso4217Currency::new("SEK", 752, "kr", "", Some(2), "Swedish Krona"),
    Iso4217Currency::new("CHE", 947, "", "", Some(2), "WIR Euro"),
    Iso4217Currency::new("CHW", 948, "", "", Some(2), "WIR Franc"),
    Iso4217Currency::new("SYP", 760, "£S", "", Some(2), "Syrian Pound"),
    Iso4217Currency::new("TWD", 901, "NT$", "$", Some(2), "New Taiwan Dollar"),
    Iso4217Currency::new("TJS", 972, "SM", "", Some(2), "Somoni"),
    Iso4217Currency::new("TZS", 834, "TSh", "", Some(2), "Tanzanian Shilling"),
    Iso4217Currency::new("THB", 764, "฿", "", Some(2), "Baht"),
    Iso4217Currency::new("TOP", 776, "T$", "", Some(2), "Pa’anga"),
    Iso4217Currency::new("TTD", 780, "TT$", "", Some(2), "Trinidad and Tobago Dollar"),
    Iso4217Currency::new("TND", 788, "DT", "", Some(3), "Tunisian Dinar"),
    Iso4217Currency::new("TRY", 949, "YTL", "", Some(2), "Turkish Lira"),
    Iso4217Currency::new("TMT", 934, "m", "", Some(2), "Turkmenistan New Manat"),
    Iso4217Currency::new("UGX", 800, "USh", "", Some(0), "Uganda Shilling"),
    Iso4217Currency::new("UAH", 980, "₴", "", Some(2), "Hryvnia"),
    Iso4217Currency::new("AED", 784, "د.إ", "", Some(2), "UAE Dirham"),
    Iso4217Currency::new("USN", 997, "US$", "$", Some(2), "US Dollar (Next day)"),
    Iso4217Currency::new("UYU", 858, "$U", "$", Some(2), "Peso Uruguayo"),
    Iso4217Currency::new("UYI", 940, "", "", Some(0), "Uruguay Peso en Unidades Indexadas (UI)"),
    Iso4217Currency::new("UYW", 927, "", "", Some(4), "Unidad Previsional"),
    Iso4217Currency::new("UZS", 860, "сум", "", Some(2), "Uzbekistan Sum"),
    Iso4217Currency::new("VUV", 548, "VT", "", Some(0), "Vatu"),
    Iso4217Currency::new("VES", 928, "Bs.S", "", Some(2), "Bolívar Soberano"),
    Iso4217Currency::new("VND", 704, "₫", "", Some(0), "Dong"),
    Iso4217Currency::new("YER", 886, "﷼", "", Some(2), "Yemeni Rial"),
    Iso4217Currency::new("ZMW", 967, "ZK", "", Some(2), "Zambian Kwacha"),
    Iso4217Currency::new("ZWL", 932, "", "", Some(2), "Zimbabwe Dollar"),
    Iso4217Currency::new("XBA", 955, "", "", None, "Bond Markets Unit European Composite Unit (EURCO)"),
    Iso4217Currency::new("XBB", 956, "", "", None, "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    Iso4217Currency::new("XBC", 957, "", "", None, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    Iso4217Currency::new("XBD", 958, "", "", None, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    Iso4217Currency::new("XTS", 963, "", "", None, "Codes specifically reserved for testing purposes"),
    Iso4217Currency::new("XXX", 999, "", "", None, "The codes assigned for transactions where no currency is involved"),
    Iso4217Currency::new("XAU", 959, "", "", None, "Gold"),
    Iso4217Currency::new("XPD", 964, "", "", None, "Palladium"),
    Iso4217Currency::new("XPT", 962, "", "", None, "Platinum"),
    Iso4217Currency::new("XAG", 961, "", "", None, "Silver"),
];
