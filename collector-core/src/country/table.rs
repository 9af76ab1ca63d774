//! ISO 3166-1 alpha-2 codes with their display names.

use super::Country;

pub(super) const COUNTRIES: &[Country] = &[
    Country { alpha2: "AD", en: "Andorra", ru: "Андорра" },
    Country { alpha2: "AE", en: "United Arab Emirates", ru: "Объединённые Арабские Эмираты" },
    Country { alpha2: "AF", en: "Afghanistan", ru: "Афганистан" },
    Country { alpha2: "AG", en: "Antigua and Barbuda", ru: "Антигуа и Барбуда" },
    Country { alpha2: "AI", en: "Anguilla", ru: "Ангилья" },
    Country { alpha2: "AL", en: "Albania", ru: "Албания" },
    Country { alpha2: "AM", en: "Armenia", ru: "Армения" },
    Country { alpha2: "AO", en: "Angola", ru: "Ангола" },
    Country { alpha2: "AQ", en: "Antarctica", ru: "Антарктида" },
    Country { alpha2: "AR", en: "Argentina", ru: "Аргентина" },
    Country { alpha2: "AS", en: "American Samoa", ru: "Американское Самоа" },
    Country { alpha2: "AT", en: "Austria", ru: "Австрия" },
    Country { alpha2: "AU", en: "Australia", ru: "Австралия" },
    Country { alpha2: "AW", en: "Aruba", ru: "Аруба" },
    Country { alpha2: "AX", en: "Åland Islands", ru: "Аландские острова" },
    Country { alpha2: "AZ", en: "Azerbaijan", ru: "Азербайджан" },
    Country { alpha2: "BA", en: "Bosnia and Herzegovina", ru: "Босния и Герцеговина" },
    Country { alpha2: "BB", en: "Barbados", ru: "Барбадос" },
    Country { alpha2: "BD", en: "Bangladesh", ru: "Бангладеш" },
    Country { alpha2: "BE", en: "Belgium", ru: "Бельгия" },
    Country { alpha2: "BF", en: "Burkina Faso", ru: "Буркина-Фасо" },
    Country { alpha2: "BG", en: "Bulgaria", ru: "Болгария" },
    Country { alpha2: "BH", en: "Bahrain", ru: "Бахрейн" },
    Country { alpha2: "BI", en: "Burundi", ru: "Бурунди" },
    Country { alpha2: "BJ", en: "Benin", ru: "Бенин" },
    Country { alpha2: "BL", en: "Saint Barthélemy", ru: "Сен-Бартелеми" },
    Country { alpha2: "BM", en: "Bermuda", ru: "Бермудские Острова" },
    Country { alpha2: "BN", en: "Brunei", ru: "Бруней" },
    Country { alpha2: "BO", en: "Bolivia", ru: "Боливия" },
    Country { alpha2: "BQ", en: "Bonaire, Sint Eustatius and Saba", ru: "Бонайре, Синт-Эстатиус и Саба" },
    Country { alpha2: "BR", en: "Brazil", ru: "Бразилия" },
    Country { alpha2: "BS", en: "Bahamas", ru: "Багамские Острова" },
    Country { alpha2: "BT", en: "Bhutan", ru: "Бутан" },
    Country { alpha2: "BV", en: "Bouvet Island", ru: "Остров Буве" },
    Country { alpha2: "BW", en: "Botswana", ru: "Ботсвана" },
    Country { alpha2: "BY", en: "Belarus", ru: "Беларусь" },
    Country { alpha2: "BZ", en: "Belize", ru: "Белиз" },
    Country { alpha2: "CA", en: "Canada", ru: "Канада" },
    Country { alpha2: "CC", en: "Cocos (Keeling) Islands", ru: "Кокосовые (Килинг) острова" },
    Country { alpha2: "CD", en: "Democratic Republic of the Congo", ru: "Демократическая Республика Конго" },
    Country { alpha2: "CF", en: "Central African Republic", ru: "Центральноафриканская Республика" },
    Country { alpha2: "CG", en: "Congo", ru: "Конго" },
    Country { alpha2: "CH", en: "Switzerland", ru: "Швейцария" },
    Country { alpha2: "CI", en: "Côte d'Ivoire", ru: "Кот-д'Ивуар" },
    Country { alpha2: "CK", en: "Cook Islands", ru: "Острова Кука" },
    Country { alpha2: "CL", en: "Chile", ru: "Чили" },
    Country { alpha2: "CM", en: "Cameroon", ru: "Камерун" },
    Country { alpha2: "CN", en: "China", ru: "Китай" },
    Country { alpha2: "CO", en: "Colombia", ru: "Колумбия" },
    Country { alpha2: "CR", en: "Costa Rica", ru: "Коста-Рика" },
    Country { alpha2: "CU", en: "Cuba", ru: "Куба" },
    Country { alpha2: "CV", en: "Cabo Verde", ru: "Кабо-Верде" },
    Country { alpha2: "CW", en: "Curaçao", ru: "Кюрасао" },
    Country { alpha2: "CX", en: "Christmas Island", ru: "Остров Рождества" },
    Country { alpha2: "CY", en: "Cyprus", ru: "Кипр" },
    Country { alpha2: "CZ", en: "Czechia", ru: "Чехия" },
    Country { alpha2: "DE", en: "Germany", ru: "Германия" },
    Country { alpha2: "DJ", en: "Djibouti", ru: "Джибути" },
    Country { alpha2: "DK", en: "Denmark", ru: "Дания" },
    Country { alpha2: "DM", en: "Dominica", ru: "Доминика" },
    Country { alpha2: "DO", en: "Dominican Republic", ru: "Доминиканская Республика" },
    Country { alpha2: "DZ", en: "Algeria", ru: "Алжир" },
    Country { alpha2: "EC", en: "Ecuador", ru: "Эквадор" },
    Country { alpha2: "EE", en: "Estonia", ru: "Эстония" },
    Country { alpha2: "EG", en: "Egypt", ru: "Египет" },
    Country { alpha2: "EH", en: "Western Sahara", ru: "Западная Сахара" },
    Country { alpha2: "ER", en: "Eritrea", ru: "Эритрея" },
    Country { alpha2: "ES", en: "Spain", ru: "Испания" },
    Country { alpha2: "ET", en: "Ethiopia", ru: "Эфиопия" },
    Country { alpha2: "FI", en: "Finland", ru: "Финляндия" },
    Country { alpha2: "FJ", en: "Fiji", ru: "Фиджи" },
    Country { alpha2: "FK", en: "Falkland Islands", ru: "Фолклендские острова" },
    Country { alpha2: "FM", en: "Micronesia", ru: "Микронезия" },
    Country { alpha2: "FO", en: "Faroe Islands", ru: "Фарерские острова" },
    Country { alpha2: "FR", en: "France", ru: "Франция" },
    Country { alpha2: "GA", en: "Gabon", ru: "Габон" },
    Country { alpha2: "GB", en: "United Kingdom", ru: "Великобритания" },
    Country { alpha2: "GD", en: "Grenada", ru: "Гренада" },
    Country { alpha2: "GE", en: "Georgia", ru: "Грузия" },
    Country { alpha2: "GF", en: "French Guiana", ru: "Французская Гвиана" },
    Country { alpha2: "GG", en: "Guernsey", ru: "Гернси" },
    Country { alpha2: "GH", en: "Ghana", ru: "Гана" },
    Country { alpha2: "GI", en: "Gibraltar", ru: "Гибралтар" },
    Country { alpha2: "GL", en: "Greenland", ru: "Гренландия" },
    Country { alpha2: "GM", en: "Gambia", ru: "Гамбия" },
    Country { alpha2: "GN", en: "Guinea", ru: "Гвинея" },
    Country { alpha2: "GP", en: "Guadeloupe", ru: "Гваделупа" },
    Country { alpha2: "GQ", en: "Equatorial Guinea", ru: "Экваториальная Гвинея" },
    Country { alpha2: "GR", en: "Greece", ru: "Греция" },
    Country { alpha2: "GS", en: "South Georgia and the South Sandwich Islands", ru: "Южная Георгия и Южные Сандвичевы острова" },
    Country { alpha2: "GT", en: "Guatemala", ru: "Гватемала" },
    Country { alpha2: "GU", en: "Guam", ru: "Гуам" },
    Country { alpha2: "GW", en: "Guinea-Bissau", ru: "Гвинея-Бисау" },
    Country { alpha2: "GY", en: "Guyana", ru: "Гайана" },
    Country { alpha2: "HK", en: "Hong Kong", ru: "Гонконг" },
    Country { alpha2: "HM", en: "Heard Island and McDonald Islands", ru: "Остров Херд и острова Макдональд" },
    Country { alpha2: "HN", en: "Honduras", ru: "Гондурас" },
    Country { alpha2: "HR", en: "Croatia", ru: "Хорватия" },
    Country { alpha2: "HT", en: "Haiti", ru: "Гаити" },
    Country { alpha2: "HU", en: "Hungary", ru: "Венгрия" },
    Country { alpha2: "ID", en: "Indonesia", ru: "Индонезия" },
    Country { alpha2: "IE", en: "Ireland", ru: "Ирландия" },
    Country { alpha2: "IL", en: "Israel", ru: "Израиль" },
    Country { alpha2: "IM", en: "Isle of Man", ru: "Остров Мэн" },
    Country { alpha2: "IN", en: "India", ru: "Индия" },
    Country { alpha2: "IO", en: "British Indian Ocean Territory", ru: "Британская территория в Индийском океане" },
    Country { alpha2: "IQ", en: "Iraq", ru: "Ирак" },
    Country { alpha2: "IR", en: "Iran", ru: "Иран" },
    Country { alpha2: "IS", en: "Iceland", ru: "Исландия" },
    Country { alpha2: "IT", en: "Italy", ru: "Италия" },
    Country { alpha2: "JE", en: "Jersey", ru: "Джерси" },
    Country { alpha2: "JM", en: "Jamaica", ru: "Ямайка" },
    Country { alpha2: "JO", en: "Jordan", ru: "Иордания" },
    Country { alpha2: "JP", en: "Japan", ru: "Япония" },
    Country { alpha2: "KE", en: "Kenya", ru: "Кения" },
    Country { alpha2: "KG", en: "Kyrgyzstan", ru: "Киргизия" },
    Country { alpha2: "KH", en: "Cambodia", ru: "Камбоджа" },
    Country { alpha2: "KI", en: "Kiribati", ru: "Кирибати" },
    Country { alpha2: "KM", en: "Comoros", ru: "Коморы" },
    Country { alpha2: "KN", en: "Saint Kitts and Nevis", ru: "Сент-Китс и Невис" },
    Country { alpha2: "KP", en: "North Korea", ru: "КНДР" },
    Country { alpha2: "KR", en: "South Korea", ru: "Республика Корея" },
    Country { alpha2: "KW", en: "Kuwait", ru: "Кувейт" },
    Country { alpha2: "KY", en: "Cayman Islands", ru: "Каймановы острова" },
    Country { alpha2: "KZ", en: "Kazakhstan", ru: "Казахстан" },
    Country { alpha2: "LA", en: "Laos", ru: "Лаос" },
    Country { alpha2: "LB", en: "Lebanon", ru: "Ливан" },
    Country { alpha2: "LC", en: "Saint Lucia", ru: "Сент-Люсия" },
    Country { alpha2: "LI", en: "Liechtenstein", ru: "Лихтенштейн" },
    Country { alpha2: "LK", en: "Sri Lanka", ru: "Шри-Ланка" },
    Country { alpha2: "LR", en: "Liberia", ru: "Либерия" },
    Country { alpha2: "LS", en: "Lesotho", ru: "Лесото" },
    Country { alpha2: "LT", en: "Lithuania", ru: "Литва" },
    Country { alpha2: "LU", en: "Luxembourg", ru: "Люксембург" },
    Country { alpha2: "LV", en: "Latvia", ru: "Латвия" },
    Country { alpha2: "LY", en: "Libya", ru: "Ливия" },
    Country { alpha2: "MA", en: "Morocco", ru: "Марокко" },
    Country { alpha2: "MC", en: "Monaco", ru: "Монако" },
    Country { alpha2: "MD", en: "Moldova", ru: "Молдова" },
    Country { alpha2: "ME", en: "Montenegro", ru: "Черногория" },
    Country { alpha2: "MF", en: "Saint Martin (French part)", ru: "Сен-Мартен" },
    Country { alpha2: "MG", en: "Madagascar", ru: "Мадагаскар" },
    Country { alpha2: "MH", en: "Marshall Islands", ru: "Маршалловы Острова" },
    Country { alpha2: "MK", en: "North Macedonia", ru: "Северная Македония" },
    Country { alpha2: "ML", en: "Mali", ru: "Мали" },
    Country { alpha2: "MM", en: "Myanmar", ru: "Мьянма" },
    Country { alpha2: "MN", en: "Mongolia", ru: "Монголия" },
    Country { alpha2: "MO", en: "Macao", ru: "Макао" },
    Country { alpha2: "MP", en: "Northern Mariana Islands", ru: "Северные Марианские острова" },
    Country { alpha2: "MQ", en: "Martinique", ru: "Мартиника" },
    Country { alpha2: "MR", en: "Mauritania", ru: "Мавритания" },
    Country { alpha2: "MS", en: "Montserrat", ru: "Монтсеррат" },
    Country { alpha2: "MT", en: "Malta", ru: "Мальта" },
    Country { alpha2: "MU", en: "Mauritius", ru: "Маврикий" },
    Country { alpha2: "MV", en: "Maldives", ru: "Мальдивы" },
    Country { alpha2: "MW", en: "Malawi", ru: "Малави" },
    Country { alpha2: "MX", en: "Mexico", ru: "Мексика" },
    Country { alpha2: "MY", en: "Malaysia", ru: "Малайзия" },
    Country { alpha2: "MZ", en: "Mozambique", ru: "Мозамбик" },
    Country { alpha2: "NA", en: "Namibia", ru: "Намибия" },
    Country { alpha2: "NC", en: "New Caledonia", ru: "Новая Каледония" },
    Country { alpha2: "NE", en: "Niger", ru: "Нигер" },
    Country { alpha2: "NF", en: "Norfolk Island", ru: "Остров Норфолк" },
    Country { alpha2: "NG", en: "Nigeria", ru: "Нигерия" },
    Country { alpha2: "NI", en: "Nicaragua", ru: "Никарагуа" },
    Country { alpha2: "NL", en: "Netherlands", ru: "Нидерланды" },
    Country { alpha2: "NO", en: "Norway", ru: "Норвегия" },
    Country { alpha2: "NP", en: "Nepal", ru: "Непал" },
    Country { alpha2: "NR", en: "Nauru", ru: "Науру" },
    Country { alpha2: "NU", en: "Niue", ru: "Ниуэ" },
    Country { alpha2: "NZ", en: "New Zealand", ru: "Новая Зеландия" },
    Country { alpha2: "OM", en: "Oman", ru: "Оман" },
    Country { alpha2: "PA", en: "Panama", ru: "Панама" },
    Country { alpha2: "PE", en: "Peru", ru: "Перу" },
    Country { alpha2: "PF", en: "French Polynesia", ru: "Французская Полинезия" },
    Country { alpha2: "PG", en: "Papua New Guinea", ru: "Папуа - Новая Гвинея" },
    Country { alpha2: "PH", en: "Philippines", ru: "Филиппины" },
    Country { alpha2: "PK", en: "Pakistan", ru: "Пакистан" },
    Country { alpha2: "PL", en: "Poland", ru: "Польша" },
    Country { alpha2: "PM", en: "Saint Pierre and Miquelon", ru: "Сен-Пьер и Микелон" },
    Country { alpha2: "PN", en: "Pitcairn", ru: "Острова Питкэрн" },
    Country { alpha2: "PR", en: "Puerto Rico", ru: "Пуэрто-Рико" },
    Country { alpha2: "PS", en: "Palestine", ru: "Палестина" },
    Country { alpha2: "PT", en: "Portugal", ru: "Португалия" },
    Country { alpha2: "PW", en: "Palau", ru: "Палау" },
    Country { alpha2: "PY", en: "Paraguay", ru: "Парагвай" },
    Country { alpha2: "QA", en: "Qatar", ru: "Катар" },
    Country { alpha2: "RE", en: "Réunion", ru: "Реюньон" },
    Country { alpha2: "RO", en: "Romania", ru: "Румыния" },
    Country { alpha2: "RS", en: "Serbia", ru: "Сербия" },
    Country { alpha2: "RU", en: "Russia", ru: "Россия" },
    Country { alpha2: "RW", en: "Rwanda", ru: "Руанда" },
    Country { alpha2: "SA", en: "Saudi Arabia", ru: "Саудовская Аравия" },
    Country { alpha2: "SB", en: "Solomon Islands", ru: "Соломоновы Острова" },
    Country { alpha2: "SC", en: "Seychelles", ru: "Сейшельские Острова" },
    Country { alpha2: "SD", en: "Sudan", ru: "Судан" },
    Country { alpha2: "SE", en: "Sweden", ru: "Швеция" },
    Country { alpha2: "SG", en: "Singapore", ru: "Сингапур" },
    Country { alpha2: "SH", en: "Saint Helena", ru: "Остров Святой Елены" },
    Country { alpha2: "SI", en: "Slovenia", ru: "Словения" },
    Country { alpha2: "SJ", en: "Svalbard and Jan Mayen", ru: "Шпицберген и Ян-Майен" },
    Country { alpha2: "SK", en: "Slovakia", ru: "Словакия" },
    Country { alpha2: "SL", en: "Sierra Leone", ru: "Сьерра-Леоне" },
    Country { alpha2: "SM", en: "San Marino", ru: "Сан-Марино" },
    Country { alpha2: "SN", en: "Senegal", ru: "Сенегал" },
    Country { alpha2: "SO", en: "Somalia", ru: "Сомали" },
    Country { alpha2: "SR", en: "Suriname", ru: "Суринам" },
    Country { alpha2: "SS", en: "South Sudan", ru: "Южный Судан" },
    Country { alpha2: "ST", en: "Sao Tome and Principe", ru: "Сан-Томе и Принсипи" },
    Country { alpha2: "SV", en: "El Salvador", ru: "Сальвадор" },
    Country { alpha2: "SX", en: "Sint Maarten (Dutch part)", ru: "Синт-Мартен" },
    Country { alpha2: "SY", en: "Syria", ru: "Сирия" },
    Country { alpha2: "SZ", en: "Eswatini", ru: "Эсватини" },
    Country { alpha2: "TC", en: "Turks and Caicos Islands", ru: "Теркс и Кайкос" },
    Country { alpha2: "TD", en: "Chad", ru: "Чад" },
    Country { alpha2: "TF", en: "French Southern Territories", ru: "Французские Южные территории" },
    Country { alpha2: "TG", en: "Togo", ru: "Того" },
    Country { alpha2: "TH", en: "Thailand", ru: "Таиланд" },
    Country { alpha2: "TJ", en: "Tajikistan", ru: "Таджикистан" },
    Country { alpha2: "TK", en: "Tokelau", ru: "Токелау" },
    Country { alpha2: "TL", en: "Timor-Leste", ru: "Восточный Тимор" },
    Country { alpha2: "TM", en: "Turkmenistan", ru: "Туркмения" },
    Country { alpha2: "TN", en: "Tunisia", ru: "Тунис" },
    Country { alpha2: "TO", en: "Tonga", ru: "Тонга" },
    Country { alpha2: "TR", en: "Turkey", ru: "Турция" },
    Country { alpha2: "TT", en: "Trinidad and Tobago", ru: "Тринидад и Тобаго" },
    Country { alpha2: "TV", en: "Tuvalu", ru: "Тувалу" },
    Country { alpha2: "TW", en: "Taiwan", ru: "Тайвань" },
    Country { alpha2: "TZ", en: "Tanzania", ru: "Танзания" },
    Country { alpha2: "UA", en: "Ukraine", ru: "Украина" },
    Country { alpha2: "UG", en: "Uganda", ru: "Уганда" },
    Country { alpha2: "UM", en: "United States Minor Outlying Islands", ru: "Внешние малые острова США" },
    Country { alpha2: "US", en: "United States", ru: "США" },
    Country { alpha2: "UY", en: "Uruguay", ru: "Уругвай" },
    Country { alpha2: "UZ", en: "Uzbekistan", ru: "Узбекистан" },
    Country { alpha2: "VA", en: "Holy See", ru: "Ватикан" },
    Country { alpha2: "VC", en: "Saint Vincent and the Grenadines", ru: "Сент-Винсент и Гренадины" },
    Country { alpha2: "VE", en: "Venezuela", ru: "Венесуэла" },
    Country { alpha2: "VG", en: "British Virgin Islands", ru: "Британские Виргинские острова" },
    Country { alpha2: "VI", en: "United States Virgin Islands", ru: "Виргинские острова США" },
    Country { alpha2: "VN", en: "Viet Nam", ru: "Вьетнам" },
    Country { alpha2: "VU", en: "Vanuatu", ru: "Вануату" },
    Country { alpha2: "WF", en: "Wallis and Futuna", ru: "Уоллис и Футуна" },
    Country { alpha2: "WS", en: "Samoa", ru: "Самоа" },
    Country { alpha2: "YE", en: "Yemen", ru: "Йемен" },
    Country { alpha2: "YT", en: "Mayotte", ru: "Майотта" },
    Country { alpha2: "ZA", en: "South Africa", ru: "Южно-Африканская Республика" },
    Country { alpha2: "ZM", en: "Zambia", ru: "Замбия" },
    Country { alpha2: "ZW", en: "Zimbabwe", ru: "Зимбабве" },
];
