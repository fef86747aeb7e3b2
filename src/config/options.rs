//! Process-wide option tables for the locale parameters the live endpoint
//! accepts. Loaded once; request building and validation both borrow from
//! here.

/// Display names of the languages the provider supports.
pub static LANGUAGES: &[&str] = &[
    "Afrikaans", "Albanian", "Amharic", "Arabic", "Armenian", "Azerbaijani", "Basque",
    "Belarusian", "Bengali", "Bosnian", "Bulgarian", "Catalan", "Cebuano", "Chinese (Simplified)",
    "Chinese (Traditional)", "Corsican", "Croatian", "Czech", "Danish", "Dutch", "English",
    "Esperanto", "Estonian", "Finnish", "French", "Frisian", "Galician", "Georgian", "German",
    "Greek", "Gujarati", "Haitian Creole", "Hausa", "Hawaiian", "Hebrew", "Hindi", "Hmong",
    "Hungarian", "Icelandic", "Igbo", "Indonesian", "Irish", "Italian", "Japanese", "Javanese",
    "Kannada", "Kazakh", "Khmer", "Kinyarwanda", "Korean", "Kurdish", "Kyrgyz", "Lao", "Latvian",
    "Lithuanian", "Luxembourgish", "Macedonian", "Malagasy", "Malay", "Malayalam", "Maltese",
    "Maori", "Marathi", "Mongolian", "Myanmar (Burmese)", "Nepali", "Norwegian",
    "Nyanja (Chichewa)", "Odia (Oriya)", "Pashto", "Persian", "Polish", "Portuguese (Portugal)",
    "Punjabi", "Romanian", "Russian", "Samoan", "Scots Gaelic", "Serbian", "Sesotho", "Shona",
    "Sindhi", "Sinhala (Sinhalese)", "Slovak", "Slovenian", "Somali", "Spanish", "Sundanese",
    "Swahili", "Swedish", "Tagalog (Filipino)", "Tajik", "Tamil", "Tatar", "Telugu", "Thai",
    "Turkish", "Turkmen", "Ukrainian", "Urdu", "Uyghur", "Uzbek", "Vietnamese", "Welsh", "Xhosa",
    "Yiddish", "Yoruba", "Zulu",
];

/// Display names of the countries the provider supports.
pub static COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Antarctica", "Algeria", "American Samoa", "Andorra", "Angola",
    "Antigua and Barbuda", "Azerbaijan", "Argentina", "Australia", "Austria", "The Bahamas",
    "Bahrain", "Bangladesh", "Armenia", "Barbados", "Belgium", "Bhutan", "Bolivia",
    "Bosnia and Herzegovina", "Botswana", "Brazil", "Belize", "Solomon Islands", "Brunei",
    "Bulgaria", "Myanmar (Burma)", "Burundi", "Cambodia", "Cameroon", "Canada", "Cape Verde",
    "Central African Republic", "Sri Lanka", "Chad", "Chile", "China", "Christmas Island",
    "Cocos (Keeling) Islands", "Colombia", "Comoros", "Republic of the Congo",
    "Democratic Republic of the Congo", "Cook Islands", "Costa Rica", "Croatia", "Cyprus",
    "Czechia", "Benin", "Denmark", "Dominica", "Dominican Republic", "Ecuador", "El Salvador",
    "Equatorial Guinea", "Ethiopia", "Eritrea", "Estonia",
    "South Georgia and the South Sandwich Islands", "Fiji", "Finland", "France",
    "French Polynesia", "French Southern and Antarctic Lands", "Djibouti", "Gabon", "Georgia",
    "The Gambia", "Germany", "Ghana", "Kiribati", "Greece", "Grenada", "Guam", "Guatemala",
    "Guinea", "Guyana", "Haiti", "Heard Island and McDonald Islands", "Vatican City", "Honduras",
    "Hungary", "Iceland", "India", "Indonesia", "Iraq", "Ireland", "Israel", "Italy", "Jamaica",
    "Japan", "Kazakhstan", "Jordan", "Kenya", "South Korea", "Kuwait", "Kyrgyzstan", "Laos",
    "Lebanon", "Lesotho", "Latvia", "Liberia", "Libya", "Liechtenstein", "Lithuania",
    "Luxembourg", "Madagascar", "Malawi", "Malaysia", "Maldives", "Mali", "Malta", "Mauritania",
    "Mauritius", "Mexico", "Monaco", "Mongolia", "Moldova", "Montenegro", "Morocco", "Mozambique",
    "Oman", "Namibia", "Nauru", "Nepal", "Netherlands", "Curacao", "Sint Maarten",
    "Caribbean Netherlands", "New Caledonia", "Vanuatu", "New Zealand", "Nicaragua", "Niger",
    "Nigeria", "Niue", "Norfolk Island", "Norway", "Northern Mariana Islands",
    "United States Minor Outlying Islands", "Federated States of Micronesia", "Marshall Islands",
    "Palau", "Pakistan", "Panama", "Papua New Guinea", "Paraguay", "Peru", "Philippines",
    "Pitcairn Islands", "Poland", "Portugal", "Guinea-Bissau", "Timor-Leste", "Qatar", "Romania",
    "Rwanda", "Saint Helena, Ascension and Tristan da Cunha", "Saint Kitts and Nevis",
    "Saint Lucia", "Saint Pierre and Miquelon", "Saint Vincent and the Grenadines", "San Marino",
    "Sao Tome and Principe", "Saudi Arabia", "Senegal", "Serbia", "Seychelles", "Sierra Leone",
    "Singapore", "Slovakia", "Vietnam", "Slovenia", "Somalia", "South Africa", "Zimbabwe",
    "Spain", "Suriname", "Eswatini", "Sweden", "Switzerland", "Tajikistan", "Thailand", "Togo",
    "Tokelau", "Tonga", "Trinidad and Tobago", "United Arab Emirates", "Tunisia", "Turkey",
    "Turkmenistan", "Tuvalu", "Uganda", "Ukraine", "North Macedonia", "Egypt", "United Kingdom",
    "Guernsey", "Jersey", "Tanzania", "United States", "Burkina Faso", "Uruguay", "Uzbekistan",
    "Venezuela", "Wallis and Futuna", "Samoa", "Yemen", "Zambia",
];

pub fn is_supported_language(name: &str) -> bool {
    LANGUAGES.contains(&name)
}

pub fn is_supported_country(name: &str) -> bool {
    COUNTRIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_names() {
        assert!(is_supported_language("English"));
        assert!(is_supported_language("Chinese (Simplified)"));
        assert!(!is_supported_language("english"));
        assert!(!is_supported_language("Klingon"));
    }

    #[test]
    fn test_known_country_names() {
        assert!(is_supported_country("United States"));
        assert!(is_supported_country("United Kingdom"));
        assert!(!is_supported_country("united states"));
        assert!(!is_supported_country("Atlantis"));
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        let mut languages: Vec<&str> = LANGUAGES.to_vec();
        languages.sort_unstable();
        languages.dedup();
        assert_eq!(languages.len(), LANGUAGES.len());

        let mut countries: Vec<&str> = COUNTRIES.to_vec();
        countries.sort_unstable();
        countries.dedup();
        assert_eq!(countries.len(), COUNTRIES.len());
    }
}
