//! The read-only country table.
//!
//! A bundled table ships with the crate so the quiz is playable out of the
//! box; an alternative table can be loaded from TOML (`[[countries]]` array).
//! Every table is validated once on construction and never mutated after.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{Country, Region, Tier},
};

/// Validated, immutable list of countries in authored order.
#[derive(Debug, Clone)]
pub struct Dataset {
    countries: Vec<Country>,
}

#[derive(Deserialize)]
struct DatasetFile {
    countries: Vec<Country>,
}

impl Dataset {
    /// Validate and wrap a country list: non-empty, unique ids, unique names.
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(QuizError::EmptyDataset);
        }
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for c in &countries {
            if !ids.insert(c.id.as_str()) {
                return Err(QuizError::DuplicateCountry(c.id.clone()));
            }
            if !names.insert(c.name.as_str()) {
                return Err(QuizError::DuplicateName(c.name.clone()));
            }
        }
        debug!(target: "dataset", count = countries.len(), "Dataset validated");
        Ok(Self { countries })
    }

    /// The table bundled with the crate.
    pub fn builtin() -> Self {
        Self {
            countries: BUILTIN.iter().map(CountryDef::to_country).collect(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: DatasetFile = toml::from_str(s)?;
        Self::new(file.countries)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ds = Self::from_toml_str(&text)?;
        info!(target: "dataset", path = %path.display(), count = ds.len(), "Loaded country table");
        Ok(ds)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Bundled table
// ---------------------------------------------------------------------------

struct CountryDef {
    id: &'static str,
    name: &'static str,
    flag: &'static str,
    region: Region,
    difficulty: Tier,
    mascot: &'static str,
    sport: &'static str,
    cuisine: &'static str,
    dress: &'static str,
    landmark: &'static str,
    symbol: &'static str,
    history: &'static str,
    fun_fact: &'static str,
}

impl CountryDef {
    fn to_country(&self) -> Country {
        Country {
            id: self.id.into(),
            name: self.name.into(),
            flag: self.flag.into(),
            region: self.region,
            mascot: self.mascot.into(),
            sport: self.sport.into(),
            cuisine: self.cuisine.into(),
            dress: self.dress.into(),
            landmark: self.landmark.into(),
            symbol: self.symbol.into(),
            history: self.history.into(),
            fun_fact: self.fun_fact.into(),
            difficulty: self.difficulty,
        }
    }
}

macro_rules! country {
    ($id:expr, $name:expr, $flag:expr, $region:ident, $tier:ident,
     $mascot:expr, $sport:expr, $cuisine:expr, $dress:expr,
     $landmark:expr, $symbol:expr, $history:expr, $fact:expr) => {
        CountryDef {
            id: $id,
            name: $name,
            flag: $flag,
            region: Region::$region,
            difficulty: Tier::$tier,
            mascot: $mascot,
            sport: $sport,
            cuisine: $cuisine,
            dress: $dress,
            landmark: $landmark,
            symbol: $symbol,
            history: $history,
            fun_fact: $fact,
        }
    };
}

const BUILTIN: &[CountryDef] = &[
    // Asia
    country!("bt", "Bhutan", "bt", Asia, Medium,
        "Takin", "Archery", "Ema Datshi", "Gho", "Paro Taktsang", "Thunder Dragon",
        "Zhabdrung Unification",
        "Bhutan measures national progress with a Gross National Happiness index."),
    country!("mn", "Mongolia", "mn", Asia, Medium,
        "Przewalski's Horse", "Mongolian Wrestling", "Buuz", "Deel", "Erdene Zuu Monastery", "Soyombo",
        "Mongol Empire",
        "Mongolia is the most sparsely populated sovereign country on Earth."),
    country!("jp", "Japan", "jp", Asia, Easy,
        "Green Pheasant", "Sumo", "Sushi", "Kimono", "Himeji Castle", "Chrysanthemum",
        "Meiji Restoration",
        "Japan has more than 6,800 islands."),
    country!("la", "Laos", "la", Asia, Hard,
        "Asian Elephant", "Kataw", "Larb", "Sinh", "Pha That Luang", "Champa Flower",
        "Kingdom of Lan Xang",
        "Laos is the most heavily bombed country per capita in history."),
    // South Asia
    country!("in", "India", "in", SouthAsia, Easy,
        "Bengal Tiger", "Cricket", "Biryani", "Sari", "Taj Mahal", "Lotus",
        "Mughal Empire",
        "India is home to the world's highest cricket ground, in Chail."),
    country!("np", "Nepal", "np", SouthAsia, Medium,
        "Himalayan Monal", "Volleyball", "Dal Bhat", "Daura-Suruwal", "Boudhanath Stupa", "Rhododendron",
        "Gorkha Unification",
        "Nepal's flag is the only non-rectangular national flag."),
    country!("lk", "Sri Lanka", "lk", SouthAsia, Medium,
        "Lion", "Cricket", "Kottu Roti", "Osariya", "Sigiriya", "Blue Water Lily",
        "Anuradhapura Kingdom",
        "Sri Lanka elected the world's first female prime minister in 1960."),
    country!("mv", "Maldives", "mv", SouthAsia, Hard,
        "Yellowfin Tuna", "Football", "Mas Huni", "Dhivehi Libaas", "Hukuru Miskiy", "Pink Rose",
        "Sultanate of the Maldives",
        "The Maldives is the lowest-lying country, averaging 1.5 m above sea level."),
    // Middle East
    country!("om", "Oman", "om", MiddleEast, Medium,
        "Arabian Oryx", "Dhow Racing", "Shuwa", "Dishdasha", "Bahla Fort", "Khanjar",
        "Omani Maritime Empire",
        "Oman once ruled Zanzibar and parts of the East African coast."),
    country!("jo", "Jordan", "jo", MiddleEast, Medium,
        "Sinai Rosefinch", "Football", "Mansaf", "Thobe", "Petra", "Black Iris",
        "Nabataean Kingdom",
        "The Dead Sea on Jordan's border is the lowest point on land."),
    country!("ye", "Yemen", "ye", MiddleEast, Hard,
        "Arabian Leopard", "Football", "Saltah", "Futa", "Old City of Sana'a", "Jambiya",
        "Kingdom of Saba",
        "Shibam in Yemen is nicknamed the Manhattan of the Desert for its mud-brick towers."),
    // Africa
    country!("ke", "Kenya", "ke", Africa, Easy,
        "Lion", "Athletics", "Ugali", "Kanga", "Fort Jesus", "Maasai Shield",
        "Mau Mau Uprising",
        "Kenyan runners have won more Olympic steeplechase golds than any other nation."),
    country!("et", "Ethiopia", "et", Africa, Medium,
        "Lion", "Athletics", "Injera", "Habesha Kemis", "Lalibela Churches", "Lion of Judah",
        "Battle of Adwa",
        "Ethiopia follows its own calendar, which runs about seven years behind the Gregorian one."),
    country!("sn", "Senegal", "sn", Africa, Medium,
        "Lion", "Laamb Wrestling", "Thieboudienne", "Boubou", "African Renaissance Monument", "Baobab",
        "Goree Island Slave Trade",
        "Lake Retba in Senegal is naturally pink because of salt-loving algae."),
    country!("mg", "Madagascar", "mg", Africa, Medium,
        "Ring-tailed Lemur", "Rugby Union", "Romazava", "Lamba", "Avenue of the Baobabs", "Traveller's Palm",
        "Merina Kingdom",
        "About 90% of Madagascar's wildlife is found nowhere else on Earth."),
    country!("bf", "Burkina Faso", "bf", Africa, Hard,
        "White Stallion", "Football", "To", "Faso Dan Fani", "Ruins of Loropeni", "Stallion",
        "Mossi Kingdoms",
        "Ouagadougou hosts FESPACO, Africa's largest film festival."),
    country!("sz", "Eswatini", "sz", Africa, Hard,
        "Purple-crested Turaco", "Football", "Sishwala", "Emahiya", "Mantenga Cultural Village", "Lion and Elephant",
        "Swazi Kingdom",
        "Eswatini is one of the last absolute monarchies in the world."),
    // Latin America
    country!("pe", "Peru", "pe", LatinAmerica, Easy,
        "Vicuna", "Football", "Ceviche", "Poncho", "Machu Picchu", "Cantuta",
        "Inca Empire",
        "Peru grows more than 3,000 varieties of potato."),
    country!("bo", "Bolivia", "bo", LatinAmerica, Medium,
        "Andean Condor", "Football", "Saltenas", "Pollera", "Tiwanaku", "Kantuta",
        "War of the Pacific",
        "Bolivia's Salar de Uyuni is the largest salt flat in the world."),
    country!("py", "Paraguay", "py", LatinAmerica, Hard,
        "Bare-throated Bellbird", "Football", "Sopa Paraguaya", "Ao Po'i", "Jesuit Missions of Trinidad", "Mburucuya",
        "Paraguayan War",
        "Paraguay's flag has a different emblem on each side."),
    country!("gt", "Guatemala", "gt", LatinAmerica, Medium,
        "Resplendent Quetzal", "Football", "Pepian", "Huipil", "Tikal", "Monja Blanca",
        "Maya Civilization",
        "Guatemala's currency, the quetzal, is named after its national bird."),
    // Caribbean
    country!("jm", "Jamaica", "jm", Caribbean, Easy,
        "Doctor Bird", "Cricket", "Ackee and Saltfish", "Quadrille Dress", "Rose Hall", "Lignum Vitae",
        "Maroon Wars",
        "Jamaica was the first tropical country to compete in the Winter Olympics bobsled."),
    country!("dm", "Dominica", "dm", Caribbean, Hard,
        "Sisserou Parrot", "Cricket", "Callaloo Soup", "Wob Dwiyet", "Boiling Lake", "Carib Wood",
        "Kalinago Resistance",
        "Dominica's flag is one of only two national flags featuring the color purple."),
    country!("gd", "Grenada", "gd", Caribbean, Hard,
        "Grenada Dove", "Cricket", "Oil Down", "Madras Dress", "Fort George", "Nutmeg",
        "Fedon Rebellion",
        "Grenada's flag features a nutmeg pod, a nod to its spice trade."),
    // Oceania
    country!("fj", "Fiji", "fj", Oceania, Medium,
        "Collared Lory", "Rugby Union", "Kokoda", "Sulu", "Sri Siva Subramaniya Temple", "Tagimoucia",
        "Cakobau Unification",
        "Fiji's rugby sevens team won the nation's first ever Olympic gold in 2016."),
    country!("ws", "Samoa", "ws", Oceania, Medium,
        "Tooth-billed Pigeon", "Rugby Union", "Palusami", "Puletasi", "Robert Louis Stevenson Museum", "Teuila",
        "Mau Movement",
        "In 2011 Samoa skipped a calendar day to move west of the International Date Line."),
    country!("to", "Tonga", "to", Oceania, Hard,
        "Red Shining Parrot", "Rugby Union", "Lu Pulu", "Ta'ovala", "Ha'amonga 'a Maui", "Heilala",
        "Tu'i Tonga Empire",
        "Tonga is the only Pacific nation that was never formally colonized."),
    country!("vu", "Vanuatu", "vu", Oceania, Hard,
        "Pig Tusk", "Football", "Laplap", "Island Dress", "Mount Yasur", "Namele Leaf",
        "Condominium Rule",
        "Land diving on Pentecost Island in Vanuatu inspired modern bungee jumping."),
    // Europe
    country!("is", "Iceland", "is", Europe, Easy,
        "Gyrfalcon", "Handball", "Hakarl", "Thjodbuningur", "Hallgrimskirkja", "Landvaettir",
        "Althing Parliament",
        "Iceland's Althing, founded in 930, is one of the oldest parliaments in the world."),
    country!("gr", "Greece", "gr", Europe, Easy,
        "Dolphin", "Football", "Moussaka", "Fustanella", "Acropolis", "Olive Branch",
        "Classical Athens",
        "Greece has more archaeological museums than any other country."),
    // Central Europe
    country!("si", "Slovenia", "si", CentralEurope, Medium,
        "Lipizzaner Horse", "Alpine Skiing", "Potica", "Narodna Nosa", "Lake Bled Church", "Triglav",
        "Habsburg Carniola",
        "Half of Slovenia is covered by forest."),
    country!("cz", "Czechia", "cz", CentralEurope, Easy,
        "Double-tailed Lion", "Ice Hockey", "Svickova", "Kroj", "Charles Bridge", "Linden Tree",
        "Velvet Revolution",
        "Czechia has the highest density of castles in Europe."),
    // Eastern Europe
    country!("ge", "Georgia", "ge", EasternEurope, Medium,
        "Caucasian Wolf", "Rugby Union", "Khachapuri", "Chokha", "Gergeti Trinity Church", "Saint George",
        "Golden Age of Queen Tamar",
        "Georgia has made wine continuously for about 8,000 years."),
    country!("md", "Moldova", "md", EasternEurope, Hard,
        "Aurochs", "Trinta Wrestling", "Mamaliga", "Ie", "Orheiul Vechi", "Aurochs Head",
        "Principality of Moldavia",
        "Moldova's Milestii Mici holds the world's largest wine collection."),
    country!("am", "Armenia", "am", EasternEurope, Medium,
        "Armenian Mouflon", "Chess", "Khorovats", "Taraz", "Geghard Monastery", "Eternity Sign",
        "Adoption of Christianity in 301",
        "Armenia made chess a compulsory school subject."),
    // Western Europe
    country!("pt", "Portugal", "pt", WesternEurope, Easy,
        "Barcelos Rooster", "Football", "Bacalhau", "Traje de Minhota", "Belem Tower", "Armillary Sphere",
        "Age of Discoveries",
        "Portugal's border with Spain is one of the oldest in Europe."),
    country!("ie", "Ireland", "ie", WesternEurope, Easy,
        "Irish Wolfhound", "Hurling", "Irish Stew", "Aran Sweater", "Newgrange", "Harp",
        "Easter Rising",
        "Newgrange in Ireland is older than both Stonehenge and the Giza pyramids."),
    // North America
    country!("ca", "Canada", "ca", NorthAmerica, Easy,
        "Beaver", "Ice Hockey", "Poutine", "Ceinture Flechee", "CN Tower", "Maple Leaf",
        "Confederation of 1867",
        "Canada has the longest coastline of any country."),
    country!("us", "United States", "us", NorthAmerica, Easy,
        "Bald Eagle", "Baseball", "Hamburger", "Cowboy Attire", "Statue of Liberty", "Bald Eagle Seal",
        "American Revolution",
        "The United States has no official national language at the federal level."),
];
