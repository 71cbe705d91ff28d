//! Static hub tables.
//!
//! Coordinates are `[lon, lat]` in degrees. Aliases are matched after text
//! normalization, so punctuation and case do not matter here.

use super::StaticHub;

const fn hub(name: &'static str, aliases: &'static [&'static str], lon: f64, lat: f64) -> StaticHub {
    StaticHub {
        name,
        aliases,
        lon,
        lat,
    }
}

pub(super) static AIRPORTS: &[StaticHub] = &[
    // East Asia
    hub("Tokyo Narita International Airport", &["tokyo", "narita", "nrt"], 140.39, 35.77),
    hub("Tokyo Haneda Airport", &["haneda", "hnd"], 139.78, 35.55),
    hub("Osaka Kansai International Airport", &["osaka", "kansai", "kix"], 135.24, 34.43),
    hub("Seoul Incheon International Airport", &["seoul", "incheon", "icn"], 126.45, 37.46),
    hub("Shanghai Pudong International Airport", &["shanghai", "pudong", "pvg"], 121.81, 31.14),
    hub("Beijing Capital International Airport", &["beijing", "pek"], 116.60, 40.08),
    hub("Guangzhou Baiyun International Airport", &["guangzhou", "can"], 113.30, 23.39),
    hub("Shenzhen Bao'an International Airport", &["shenzhen", "szx"], 113.81, 22.64),
    hub("Hong Kong International Airport", &["hong kong", "hkg", "chek lap kok"], 113.92, 22.31),
    hub("Taipei Taoyuan International Airport", &["taipei", "taoyuan", "tpe"], 121.23, 25.08),
    // South-east and south Asia
    hub("Singapore Changi Airport", &["singapore", "changi", "sin"], 103.99, 1.36),
    hub("Bangkok Suvarnabhumi Airport", &["bangkok", "suvarnabhumi", "bkk"], 100.75, 13.69),
    hub("Kuala Lumpur International Airport", &["kuala lumpur", "klia", "kul"], 101.71, 2.74),
    hub("Ho Chi Minh City Tan Son Nhat Airport", &["ho chi minh", "saigon", "sgn"], 106.66, 10.82),
    hub("Indira Gandhi International Airport", &["delhi", "new delhi", "del"], 77.10, 28.56),
    hub("Chhatrapati Shivaji Maharaj International Airport", &["mumbai", "bombay", "bom"], 72.87, 19.09),
    // Middle East and Central Asia
    hub("Dubai International Airport", &["dubai", "dxb"], 55.36, 25.25),
    hub("Hamad International Airport", &["doha", "doh"], 51.61, 25.27),
    hub("Istanbul Airport", &["istanbul", "ist"], 28.75, 41.26),
    hub("Almaty International Airport", &["almaty", "ala"], 77.04, 43.35),
    hub("Tashkent International Airport", &["tashkent", "tas"], 69.28, 41.26),
    // Europe
    hub("London Heathrow Airport", &["london", "heathrow", "lhr"], -0.45, 51.47),
    hub("Paris Charles de Gaulle Airport", &["paris", "charles de gaulle", "cdg"], 2.55, 49.01),
    hub("Frankfurt Airport", &["frankfurt", "fra"], 8.57, 50.04),
    hub("Amsterdam Schiphol Airport", &["amsterdam", "schiphol", "ams"], 4.76, 52.31),
    hub("Leipzig/Halle Airport", &["leipzig", "lej"], 12.24, 51.42),
    hub("Liege Airport", &["liege", "lgg"], 5.44, 50.64),
    hub("Madrid Barajas Airport", &["madrid", "mad"], -3.57, 40.49),
    hub("Milan Malpensa Airport", &["milan", "malpensa", "mxp"], 8.72, 45.63),
    // Africa
    hub("Cairo International Airport", &["cairo", "cai"], 31.41, 30.12),
    hub("Addis Ababa Bole International Airport", &["addis ababa", "add"], 38.80, 8.98),
    hub("Jomo Kenyatta International Airport", &["nairobi", "nbo"], 36.93, -1.32),
    hub("O. R. Tambo International Airport", &["johannesburg", "jnb"], 28.24, -26.14),
    hub("Murtala Muhammed International Airport", &["lagos", "los"], 3.32, 6.58),
    // Americas
    hub("John F. Kennedy International Airport", &["new york", "jfk"], -73.78, 40.64),
    hub("Los Angeles International Airport", &["los angeles", "lax"], -118.41, 33.94),
    hub("Chicago O'Hare International Airport", &["chicago", "o hare", "ord"], -87.90, 41.98),
    hub("Memphis International Airport", &["memphis", "mem"], -89.98, 35.04),
    hub("Louisville Muhammad Ali International Airport", &["louisville", "sdf"], -85.74, 38.17),
    hub("Dallas/Fort Worth International Airport", &["dallas", "fort worth", "dfw"], -97.04, 32.90),
    hub("Denver International Airport", &["denver", "den"], -104.67, 39.86),
    hub("Miami International Airport", &["miami", "mia"], -80.29, 25.80),
    hub("Ted Stevens Anchorage International Airport", &["anchorage", "anc"], -149.99, 61.17),
    hub("Toronto Pearson International Airport", &["toronto", "yyz"], -79.63, 43.68),
    hub("Mexico City International Airport", &["mexico city", "mex"], -99.07, 19.44),
    hub("Sao Paulo Guarulhos International Airport", &["sao paulo", "guarulhos", "gru"], -46.47, -23.43),
    hub("Bogota El Dorado International Airport", &["bogota", "bog"], -74.15, 4.70),
    // Oceania
    hub("Sydney Kingsford Smith Airport", &["sydney", "syd"], 151.18, -33.95),
    hub("Melbourne Airport", &["melbourne", "mel"], 144.84, -37.67),
];

pub(super) static SEAPORTS: &[StaticHub] = &[
    // East Asia
    hub("Port of Shanghai", &["shanghai", "shanghai port", "yangshan"], 121.80, 31.00),
    hub("Port of Ningbo-Zhoushan", &["ningbo", "zhoushan"], 121.85, 29.93),
    hub("Port of Shenzhen", &["shenzhen", "yantian", "shekou"], 114.27, 22.57),
    hub("Port of Guangzhou", &["guangzhou", "nansha"], 113.60, 22.75),
    hub("Port of Hong Kong", &["hong kong", "kwai tsing"], 114.12, 22.33),
    hub("Port of Qingdao", &["qingdao"], 120.30, 36.07),
    hub("Port of Tianjin", &["tianjin", "xingang"], 117.78, 38.98),
    hub("Port of Busan", &["busan", "pusan"], 129.04, 35.10),
    hub("Port of Tokyo", &["tokyo"], 139.79, 35.62),
    hub("Port of Yokohama", &["yokohama"], 139.65, 35.45),
    hub("Port of Kaohsiung", &["kaohsiung"], 120.28, 22.61),
    // South-east and south Asia
    hub("Port of Singapore", &["singapore", "pasir panjang", "tuas"], 103.77, 1.26),
    hub("Port Klang", &["klang", "kuala lumpur"], 101.39, 3.00),
    hub("Port of Tanjung Pelepas", &["tanjung pelepas"], 103.55, 1.36),
    hub("Laem Chabang Port", &["laem chabang", "bangkok"], 100.88, 13.08),
    hub("Port of Ho Chi Minh City", &["ho chi minh", "cat lai", "saigon"], 106.77, 10.76),
    hub("Colombo Port", &["colombo"], 79.85, 6.95),
    hub("Jawaharlal Nehru Port", &["mumbai", "nhava sheva", "jnpt"], 72.95, 18.95),
    hub("Chennai Port", &["chennai", "madras"], 80.30, 13.10),
    // Middle East
    hub("Jebel Ali Port", &["dubai", "jebel ali"], 55.03, 25.01),
    hub("Port of Jeddah", &["jeddah"], 39.15, 21.47),
    hub("Port of Salalah", &["salalah"], 54.00, 16.94),
    hub("Port Said", &["port said"], 32.30, 31.26),
    // Europe
    hub("Port of Rotterdam", &["rotterdam", "maasvlakte"], 4.05, 51.95),
    hub("Port of Antwerp-Bruges", &["antwerp", "antwerpen"], 4.40, 51.27),
    hub("Port of Hamburg", &["hamburg"], 9.93, 53.54),
    hub("Port of Bremerhaven", &["bremerhaven", "bremen"], 8.55, 53.56),
    hub("Port of Felixstowe", &["felixstowe", "london"], 1.32, 51.95),
    hub("Port of Le Havre", &["le havre", "paris"], 0.16, 49.48),
    hub("Port of Valencia", &["valencia", "madrid"], -0.32, 39.44),
    hub("Port of Algeciras", &["algeciras"], -5.43, 36.13),
    hub("Port of Genoa", &["genoa", "genova", "milan"], 8.91, 44.40),
    hub("Port of Piraeus", &["piraeus", "athens"], 23.62, 37.94),
    hub("Port of Gdansk", &["gdansk", "warsaw"], 18.66, 54.40),
    // Africa
    hub("Port of Tanger Med", &["tanger med", "tangier"], -5.50, 35.89),
    hub("Port of Durban", &["durban"], 31.03, -29.87),
    hub("Port of Mombasa", &["mombasa", "nairobi"], 39.65, -4.06),
    hub("Port of Lagos", &["lagos", "apapa", "tin can"], 3.37, 6.44),
    // Americas
    hub("Port of Los Angeles", &["los angeles", "san pedro"], -118.27, 33.73),
    hub("Port of Long Beach", &["long beach"], -118.21, 33.75),
    hub("Port of Oakland", &["oakland", "san francisco"], -122.32, 37.80),
    hub("Port of Seattle", &["seattle", "tacoma"], -122.36, 47.58),
    hub("Port of Vancouver", &["vancouver"], -123.10, 49.29),
    hub("Port of New York and New Jersey", &["new york", "newark", "new jersey"], -74.15, 40.68),
    hub("Port of Savannah", &["savannah", "atlanta"], -81.10, 32.08),
    hub("Port of Houston", &["houston", "dallas"], -95.02, 29.61),
    hub("Port of Manzanillo", &["manzanillo", "mexico city"], -104.31, 19.06),
    hub("Port of Santos", &["santos", "sao paulo"], -46.30, -23.96),
    hub("Port of Cartagena", &["cartagena", "bogota"], -75.54, 10.39),
    hub("Port of Buenos Aires", &["buenos aires"], -58.37, -34.58),
    // Oceania
    hub("Port Botany", &["sydney", "botany"], 151.22, -33.97),
    hub("Port of Melbourne", &["melbourne"], 144.92, -37.83),
];

pub(super) static CITIES: &[StaticHub] = &[
    // East Asia
    hub("Shanghai", &[], 121.47, 31.23),
    hub("Beijing", &["peking"], 116.41, 39.90),
    hub("Shenzhen", &[], 114.06, 22.54),
    hub("Guangzhou", &["canton"], 113.26, 23.13),
    hub("Hong Kong", &[], 114.17, 22.32),
    hub("Ningbo", &[], 121.55, 29.87),
    hub("Qingdao", &[], 120.38, 36.07),
    hub("Tianjin", &[], 117.20, 39.08),
    hub("Chengdu", &[], 104.07, 30.57),
    hub("Chongqing", &[], 106.55, 29.56),
    hub("Wuhan", &[], 114.31, 30.59),
    hub("Xi'an", &["xian"], 108.94, 34.34),
    hub("Urumqi", &[], 87.62, 43.83),
    hub("Taipei", &[], 121.56, 25.03),
    hub("Kaohsiung", &[], 120.30, 22.63),
    hub("Seoul", &[], 126.98, 37.57),
    hub("Busan", &["pusan"], 129.08, 35.18),
    hub("Tokyo", &[], 139.69, 35.69),
    hub("Yokohama", &[], 139.64, 35.44),
    hub("Osaka", &[], 135.50, 34.69),
    hub("Ulaanbaatar", &["ulan bator"], 106.91, 47.89),
    hub("Vladivostok", &[], 131.89, 43.12),
    // South-east and south Asia
    hub("Singapore", &[], 103.82, 1.35),
    hub("Kuala Lumpur", &[], 101.69, 3.14),
    hub("Bangkok", &[], 100.50, 13.76),
    hub("Hanoi", &[], 105.83, 21.03),
    hub("Ho Chi Minh City", &["saigon"], 106.63, 10.82),
    hub("Jakarta", &[], 106.85, -6.21),
    hub("Manila", &[], 120.98, 14.60),
    hub("Delhi", &["new delhi"], 77.10, 28.70),
    hub("Mumbai", &["bombay"], 72.88, 19.08),
    hub("Chennai", &["madras"], 80.27, 13.08),
    hub("Kolkata", &["calcutta"], 88.36, 22.57),
    hub("Colombo", &[], 79.86, 6.93),
    hub("Karachi", &[], 67.00, 24.86),
    hub("Lahore", &[], 74.36, 31.55),
    hub("Dhaka", &[], 90.41, 23.81),
    // Middle East and Central Asia
    hub("Dubai", &[], 55.27, 25.20),
    hub("Doha", &[], 51.53, 25.29),
    hub("Riyadh", &[], 46.68, 24.71),
    hub("Jeddah", &[], 39.19, 21.49),
    hub("Tehran", &[], 51.39, 35.69),
    hub("Istanbul", &[], 28.98, 41.01),
    hub("Ankara", &[], 32.85, 39.93),
    hub("Almaty", &["alma ata"], 76.85, 43.22),
    hub("Astana", &["nur sultan"], 71.43, 51.13),
    hub("Tashkent", &[], 69.24, 41.30),
    hub("Kabul", &[], 69.21, 34.56),
    // Europe
    hub("London", &[], -0.13, 51.51),
    hub("Paris", &[], 2.35, 48.86),
    hub("Rotterdam", &[], 4.48, 51.92),
    hub("Amsterdam", &[], 4.90, 52.37),
    hub("Antwerp", &["antwerpen"], 4.40, 51.22),
    hub("Hamburg", &[], 9.99, 53.55),
    hub("Berlin", &[], 13.40, 52.52),
    hub("Frankfurt", &["frankfurt am main"], 8.68, 50.11),
    hub("Munich", &["munchen"], 11.58, 48.14),
    hub("Milan", &["milano"], 9.19, 45.46),
    hub("Rome", &["roma"], 12.50, 41.90),
    hub("Madrid", &[], -3.70, 40.42),
    hub("Barcelona", &[], 2.17, 41.39),
    hub("Valencia", &[], -0.38, 39.47),
    hub("Lisbon", &["lisboa"], -9.14, 38.72),
    hub("Vienna", &["wien"], 16.37, 48.21),
    hub("Warsaw", &["warszawa"], 21.01, 52.23),
    hub("Budapest", &[], 19.04, 47.50),
    hub("Athens", &[], 23.73, 37.98),
    hub("Moscow", &[], 37.62, 55.76),
    hub("Kyiv", &["kiev"], 30.52, 50.45),
    // Africa
    hub("Cairo", &[], 31.24, 30.04),
    hub("Casablanca", &[], -7.59, 33.57),
    hub("Tangier", &["tanger"], -5.80, 35.76),
    hub("Lagos", &[], 3.38, 6.52),
    hub("Accra", &[], -0.19, 5.60),
    hub("Nairobi", &[], 36.82, -1.29),
    hub("Mombasa", &[], 39.67, -4.04),
    hub("Addis Ababa", &[], 38.75, 9.03),
    hub("Johannesburg", &[], 28.05, -26.20),
    hub("Durban", &[], 31.02, -29.86),
    hub("Cape Town", &[], 18.42, -33.92),
    // North America
    hub("Los Angeles", &[], -118.24, 34.05),
    hub("Long Beach", &[], -118.19, 33.77),
    hub("San Francisco", &[], -122.42, 37.77),
    hub("Seattle", &[], -122.33, 47.61),
    hub("Vancouver", &[], -123.12, 49.28),
    hub("Denver", &[], -104.99, 39.74),
    hub("Dallas", &[], -96.80, 32.78),
    hub("Houston", &[], -95.37, 29.76),
    hub("Chicago", &[], -87.63, 41.88),
    hub("Memphis", &[], -90.05, 35.15),
    hub("Atlanta", &[], -84.39, 33.75),
    hub("Miami", &[], -80.19, 25.76),
    hub("New York", &["new york city", "nyc"], -74.01, 40.71),
    hub("Savannah", &[], -81.09, 32.08),
    hub("Toronto", &[], -79.38, 43.65),
    hub("Montreal", &[], -73.57, 45.50),
    hub("Mexico City", &["ciudad de mexico"], -99.13, 19.43),
    hub("Monterrey", &[], -100.32, 25.69),
    // South America
    hub("Sao Paulo", &[], -46.63, -23.55),
    hub("Rio de Janeiro", &["rio"], -43.17, -22.91),
    hub("Buenos Aires", &[], -58.38, -34.60),
    hub("Santiago", &[], -70.67, -33.45),
    hub("Lima", &[], -77.04, -12.05),
    hub("Bogota", &[], -74.07, 4.71),
    // Oceania
    hub("Sydney", &[], 151.21, -33.87),
    hub("Melbourne", &[], 144.96, -37.81),
    hub("Brisbane", &[], 153.03, -27.47),
    hub("Perth", &[], 115.86, -31.95),
    hub("Auckland", &[], 174.76, -36.85),
];
