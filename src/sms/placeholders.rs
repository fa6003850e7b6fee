//! Phone placeholder and help text per country.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneHint {
    pub country_code: &'static str,
    pub placeholder: &'static str,
    pub help_text: &'static str,
}

// US must stay first, unknown codes fall back to it.
const PHONE_HINTS: [PhoneHint; 13] = [
    PhoneHint {
        country_code: "US",
        placeholder: "+1 000 000 0000",
        help_text: "Include the US country code +1 before the phone number",
    },
    PhoneHint {
        country_code: "GB",
        placeholder: "+44 0000 000000",
        help_text: "Include the GB country code +44 before the phone number",
    },
    PhoneHint {
        country_code: "CA",
        placeholder: "+1 000 000 0000",
        help_text: "Include the CA country code +1 before the phone number",
    },
    PhoneHint {
        country_code: "AU",
        placeholder: "+61 000 000 000",
        help_text: "Include the AU country code +61 before the phone number",
    },
    PhoneHint {
        country_code: "DE",
        placeholder: "+49 000 0000000",
        help_text: "Fügen Sie vor der Telefonnummer die DE-Ländervorwahl +49 ein",
    },
    PhoneHint {
        country_code: "FR",
        placeholder: "+33 0 00 00 00 00",
        help_text: "Incluez le code pays FR +33 avant le numéro de téléphone",
    },
    PhoneHint {
        country_code: "ES",
        placeholder: "+34 000 000 000",
        help_text: "Incluya el código de país ES +34 antes del número de teléfono",
    },
    PhoneHint {
        country_code: "NL",
        placeholder: "+31 0 00000000",
        help_text: "Voeg de NL-landcode +31 toe vóór het telefoonnummer",
    },
    PhoneHint {
        country_code: "BE",
        placeholder: "+32 000 00 00 00",
        help_text: "Incluez le code pays BE +32 avant le numéro de téléphone",
    },
    PhoneHint {
        country_code: "CH",
        placeholder: "+41 00 000 00 00",
        help_text: "Fügen Sie vor der Telefonnummer die CH-Ländervorwahl +41 ein",
    },
    PhoneHint {
        country_code: "AT",
        placeholder: "+43 000 000 0000",
        help_text: "Fügen Sie vor der Telefonnummer die AT-Ländervorwahl +43 ein",
    },
    PhoneHint {
        country_code: "IE",
        placeholder: "+353 00 000 0000",
        help_text: "Include the IE country code +353 before the phone number",
    },
    PhoneHint {
        country_code: "IT",
        placeholder: "+39 000 000 0000",
        help_text: "Includere il prefisso internazionale IT +39 prima del numero di telefono",
    },
];

pub fn phone_hint(country_code: &str) -> &'static PhoneHint {
    PHONE_HINTS
        .iter()
        .find(|hint| hint.country_code == country_code)
        .unwrap_or(&PHONE_HINTS[0])
}
