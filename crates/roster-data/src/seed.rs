//! The fixed roster of known real players.
//!
//! These records are curated by hand and always emitted whole, ahead of any
//! synthetic long tail. Team names are kept as the franchises the player
//! actually suited up for; normalization to current names happens once the
//! full collection is assembled.

use roster::models::Player;

fn player(
    name: &str,
    fwar: f64,
    teams: &[&str],
    positions: &[&str],
    years: [&str; 2],
    minor_league: bool,
    signing_country: Option<&str>,
) -> Player {
    Player {
        name: name.to_string(),
        fwar,
        teams: teams.iter().map(|t| t.to_string()).collect(),
        positions: positions.iter().map(|p| p.to_string()).collect(),
        years_active: years.map(|y| y.to_string()),
        minor_league,
        international_signing: signing_country.is_some(),
        signing_country: signing_country.unwrap_or_default().to_string(),
    }
}

/// Returns the curated seed roster, in curated order.
#[rustfmt::skip]
pub fn known_players() -> Vec<Player> {
    vec![
        player("Babe Ruth", 182.5, &["New York Yankees", "Boston Red Sox"], &["OF", "SP"], ["1914", "1935"], false, None),
        player("Barry Bonds", 164.4, &["San Francisco Giants", "Pittsburgh Pirates"], &["LF", "OF"], ["1986", "2007"], false, None),
        player("Willie Mays", 156.2, &["San Francisco Giants", "New York Mets"], &["CF", "OF"], ["1951", "1973"], false, None),
        player("Ty Cobb", 151.0, &["Detroit Tigers", "Philadelphia Athletics"], &["OF", "CF"], ["1905", "1928"], false, None),
        player("Hank Aaron", 143.0, &["Atlanta Braves", "Milwaukee Braves", "Milwaukee Brewers"], &["RF", "OF"], ["1954", "1976"], false, None),
        player("Tris Speaker", 134.1, &["Boston Red Sox", "Cleveland Guardians", "Washington Senators", "Philadelphia Athletics"], &["CF", "OF"], ["1907", "1928"], false, None),
        player("Honus Wagner", 130.8, &["Pittsburgh Pirates", "Louisville Colonels"], &["SS", "OF"], ["1897", "1917"], false, None),
        player("Stan Musial", 128.3, &["St. Louis Cardinals"], &["OF", "1B"], ["1941", "1963"], false, None),
        player("Rogers Hornsby", 127.1, &["St. Louis Cardinals", "New York Giants", "Boston Braves", "Chicago Cubs", "St. Louis Browns"], &["2B", "SS"], ["1915", "1937"], false, None),
        player("Eddie Collins", 124.0, &["Philadelphia Athletics", "Chicago White Sox"], &["2B"], ["1906", "1930"], false, None),
        player("Ted Williams", 123.1, &["Boston Red Sox"], &["LF", "OF"], ["1939", "1960"], false, None),
        player("Mickey Mantle", 110.3, &["New York Yankees"], &["CF", "OF"], ["1951", "1968"], false, None),
        player("Lou Gehrig", 112.4, &["New York Yankees"], &["1B"], ["1923", "1939"], false, None),
        player("Mike Trout", 85.2, &["Los Angeles Angels"], &["CF", "OF"], ["2011", "2024"], false, None),
        player("Albert Pujols", 100.7, &["St. Louis Cardinals", "Los Angeles Angels", "Los Angeles Dodgers"], &["1B", "DH"], ["2001", "2022"], false, Some("Dominican Republic")),
        player("Alex Rodriguez", 117.6, &["Seattle Mariners", "Texas Rangers", "New York Yankees"], &["SS", "3B"], ["1994", "2016"], false, None),
        player("Derek Jeter", 71.3, &["New York Yankees"], &["SS"], ["1995", "2014"], false, None),
        player("Cal Ripken Jr.", 95.9, &["Baltimore Orioles"], &["SS", "3B"], ["1981", "2001"], false, None),
        player("Rickey Henderson", 111.2, &["Oakland Athletics", "New York Yankees", "Toronto Blue Jays", "San Diego Padres", "Anaheim Angels", "New York Mets", "Seattle Mariners", "Boston Red Sox", "Los Angeles Dodgers"], &["LF", "OF"], ["1979", "2003"], false, None),
        player("Pete Rose", 79.6, &["Cincinnati Reds", "Philadelphia Phillies", "Montreal Expos"], &["OF", "1B", "2B", "3B"], ["1963", "1986"], false, None),
        player("Randy Johnson", 101.1, &["Montreal Expos", "Seattle Mariners", "Houston Astros", "Arizona Diamondbacks", "New York Yankees", "San Francisco Giants"], &["P"], ["1988", "2009"], false, None),
        player("Roger Clemens", 139.2, &["Boston Red Sox", "Toronto Blue Jays", "New York Yankees", "Houston Astros"], &["P"], ["1984", "2007"], false, None),
        player("Greg Maddux", 106.8, &["Chicago Cubs", "Atlanta Braves", "Los Angeles Dodgers", "San Diego Padres"], &["P"], ["1986", "2008"], false, None),
        player("Pedro Martinez", 86.0, &["Los Angeles Dodgers", "Montreal Expos", "Boston Red Sox", "New York Mets", "Philadelphia Phillies"], &["P"], ["1992", "2009"], false, Some("Dominican Republic")),
        player("Mariano Rivera", 56.3, &["New York Yankees"], &["CP"], ["1995", "2013"], false, Some("Panama")),
        player("Ichiro Suzuki", 60.0, &["Seattle Mariners", "New York Yankees", "Miami Marlins"], &["RF", "OF"], ["2001", "2019"], false, Some("Japan")),
        player("Roberto Clemente", 94.8, &["Pittsburgh Pirates"], &["RF", "OF"], ["1955", "1972"], false, Some("Puerto Rico")),
        player("Vladimir Guerrero", 59.5, &["Montreal Expos", "Los Angeles Angels", "Texas Rangers", "Baltimore Orioles"], &["RF", "OF", "DH"], ["1996", "2011"], false, Some("Dominican Republic")),
        player("Miguel Cabrera", 67.3, &["Florida Marlins", "Detroit Tigers"], &["1B", "3B", "DH"], ["2003", "2023"], false, Some("Venezuela")),
        player("David Ortiz", 55.3, &["Minnesota Twins", "Boston Red Sox"], &["DH", "1B"], ["1997", "2016"], false, Some("Dominican Republic")),
        player("Adrian Beltre", 93.5, &["Los Angeles Dodgers", "Seattle Mariners", "Boston Red Sox", "Texas Rangers"], &["3B"], ["1998", "2018"], false, Some("Dominican Republic")),
        player("Carlos Beltran", 70.1, &["Kansas City Royals", "Houston Astros", "New York Mets", "San Francisco Giants", "St. Louis Cardinals", "New York Yankees", "Texas Rangers"], &["CF", "OF"], ["1998", "2017"], false, Some("Puerto Rico")),
        player("Jose Altuve", 51.2, &["Houston Astros"], &["2B"], ["2011", "2024"], false, Some("Venezuela")),
        player("Manny Ramirez", 69.4, &["Cleveland Guardians", "Boston Red Sox", "Los Angeles Dodgers", "Chicago White Sox", "Tampa Bay Rays"], &["LF", "OF", "DH"], ["1993", "2011"], false, Some("Dominican Republic")),
        player("Robinson Cano", 57.4, &["New York Yankees", "Seattle Mariners", "New York Mets", "San Diego Padres", "Atlanta Braves"], &["2B"], ["2005", "2022"], false, Some("Dominican Republic")),
        player("Yadier Molina", 42.1, &["St. Louis Cardinals"], &["C"], ["2004", "2022"], false, Some("Puerto Rico")),
        player("Fernando Valenzuela", 41.3, &["Los Angeles Dodgers", "California Angels", "Baltimore Orioles", "Philadelphia Phillies", "San Diego Padres", "St. Louis Cardinals"], &["P"], ["1980", "1997"], false, Some("Mexico")),
        player("Juan Marichal", 61.9, &["San Francisco Giants", "Boston Red Sox", "Los Angeles Dodgers"], &["P"], ["1960", "1975"], false, Some("Dominican Republic")),
        player("Luis Aparicio", 55.8, &["Chicago White Sox", "Baltimore Orioles", "Boston Red Sox"], &["SS"], ["1956", "1973"], false, Some("Venezuela")),
        player("Rod Carew", 81.2, &["Minnesota Twins", "California Angels"], &["1B", "2B"], ["1967", "1985"], false, Some("Panama")),
        player("Tony Perez", 54.0, &["Cincinnati Reds", "Montreal Expos", "Boston Red Sox", "Philadelphia Phillies"], &["1B", "3B"], ["1964", "1986"], false, Some("Cuba")),
        player("Minnie Minoso", 50.3, &["Cleveland Guardians", "Chicago White Sox", "St. Louis Cardinals", "Washington Senators"], &["LF", "OF", "3B"], ["1949", "1980"], false, Some("Cuba")),
        player("Orlando Cepeda", 50.1, &["San Francisco Giants", "St. Louis Cardinals", "Atlanta Braves", "Oakland Athletics", "Boston Red Sox", "Kansas City Royals"], &["1B"], ["1958", "1974"], false, Some("Puerto Rico")),
        player("Felipe Alou", 32.1, &["San Francisco Giants", "Milwaukee Braves", "Atlanta Braves", "Oakland Athletics", "New York Yankees", "Montreal Expos"], &["OF", "1B"], ["1958", "1974"], false, Some("Dominican Republic")),
        player("Tony Oliva", 43.0, &["Minnesota Twins"], &["RF", "OF"], ["1962", "1976"], false, Some("Cuba")),
        player("Bert Campaneris", 53.9, &["Kansas City Athletics", "Oakland Athletics", "Texas Rangers", "California Angels", "New York Yankees"], &["SS"], ["1964", "1983"], false, Some("Cuba")),
        player("Jose Canseco", 42.7, &["Oakland Athletics", "Texas Rangers", "Boston Red Sox", "Toronto Blue Jays", "Tampa Bay Devil Rays", "New York Yankees", "Chicago White Sox"], &["OF", "DH"], ["1985", "2001"], false, Some("Cuba")),
        player("Rafael Palmeiro", 71.9, &["Chicago Cubs", "Texas Rangers", "Baltimore Orioles"], &["1B", "DH"], ["1986", "2005"], false, Some("Cuba")),
        player("Sandy Alomar Jr.", 15.2, &["San Diego Padres", "Cleveland Guardians", "Chicago White Sox", "Colorado Rockies", "Texas Rangers", "Los Angeles Dodgers"], &["C"], ["1988", "2007"], false, Some("Puerto Rico")),
        player("Edgar Martinez", 68.4, &["Seattle Mariners"], &["DH", "3B"], ["1987", "2004"], false, Some("Puerto Rico")),
        player("Ivan Rodriguez", 68.7, &["Texas Rangers", "Florida Marlins", "Detroit Tigers", "New York Yankees", "Houston Astros", "Washington Nationals"], &["C"], ["1991", "2011"], false, Some("Puerto Rico")),
        player("Carlos Delgado", 44.1, &["Toronto Blue Jays", "Florida Marlins", "New York Mets"], &["1B", "DH"], ["1993", "2009"], false, Some("Puerto Rico")),
        player("Jorge Posada", 42.7, &["New York Yankees"], &["C"], ["1995", "2011"], false, Some("Puerto Rico")),
        player("Bernie Williams", 49.6, &["New York Yankees"], &["CF", "OF"], ["1991", "2006"], false, Some("Puerto Rico")),
        player("Roberto Alomar", 67.0, &["San Diego Padres", "Toronto Blue Jays", "Baltimore Orioles", "Cleveland Guardians", "New York Mets", "Chicago White Sox", "Arizona Diamondbacks"], &["2B"], ["1988", "2004"], false, Some("Puerto Rico")),
        player("Sandy Koufax", 48.9, &["Brooklyn Dodgers", "Los Angeles Dodgers"], &["P"], ["1955", "1966"], false, None),
        player("Tom Seaver", 109.9, &["New York Mets", "Cincinnati Reds", "Chicago White Sox", "Boston Red Sox"], &["P"], ["1967", "1986"], false, None),
        player("Nolan Ryan", 81.3, &["New York Mets", "California Angels", "Houston Astros", "Texas Rangers"], &["P"], ["1966", "1993"], false, None),
        player("Steve Carlton", 90.3, &["St. Louis Cardinals", "Philadelphia Phillies", "San Francisco Giants", "Chicago White Sox", "Cleveland Guardians", "Minnesota Twins"], &["P"], ["1965", "1988"], false, None),
        player("Bob Gibson", 89.1, &["St. Louis Cardinals"], &["P"], ["1959", "1975"], false, None),
        player("Warren Spahn", 100.2, &["Boston Braves", "Milwaukee Braves", "New York Mets", "San Francisco Giants"], &["P"], ["1942", "1965"], false, None),
        player("Cy Young", 163.6, &["Cleveland Spiders", "St. Louis Cardinals", "Boston Red Sox", "Cleveland Naps", "Boston Braves"], &["P"], ["1890", "1911"], false, None),
        player("Walter Johnson", 164.5, &["Washington Senators"], &["P"], ["1907", "1927"], false, None),
        player("Christy Mathewson", 106.3, &["New York Giants", "Cincinnati Reds"], &["P"], ["1900", "1916"], false, None),
        player("Grover Cleveland Alexander", 109.3, &["Philadelphia Phillies", "Chicago Cubs", "St. Louis Cardinals"], &["P"], ["1911", "1930"], false, None),
        player("Lefty Grove", 109.7, &["Philadelphia Athletics", "Boston Red Sox"], &["P"], ["1925", "1941"], false, None),
        player("Satchel Paige", 10.0, &["Cleveland Guardians", "St. Louis Browns", "Kansas City Athletics"], &["P"], ["1948", "1965"], true, None),
        player("Josh Gibson", 0.0, &["Pittsburgh Crawfords", "Homestead Grays"], &["C"], ["1930", "1946"], true, None),
        player("Cool Papa Bell", 0.0, &["St. Louis Stars", "Pittsburgh Crawfords", "Homestead Grays"], &["CF", "OF"], ["1922", "1946"], true, None),
        player("Oscar Charleston", 0.0, &["Indianapolis ABCs", "Pittsburgh Crawfords", "Homestead Grays"], &["CF", "OF", "1B"], ["1915", "1945"], true, None),
        player("Martin Dihigo", 0.0, &["Cuban Stars", "Homestead Grays"], &["P", "2B", "SS", "3B", "OF"], ["1923", "1945"], true, Some("Cuba")),
        player("Jose Fernandez", 14.1, &["Miami Marlins"], &["P"], ["2013", "2016"], false, Some("Cuba")),
        player("Aroldis Chapman", 20.1, &["Cincinnati Reds", "New York Yankees", "Chicago Cubs", "Kansas City Royals", "Texas Rangers", "Pittsburgh Pirates"], &["CP"], ["2010", "2024"], false, Some("Cuba")),
        player("Yasiel Puig", 19.3, &["Los Angeles Dodgers", "Cincinnati Reds", "Cleveland Guardians"], &["RF", "OF"], ["2013", "2019"], false, Some("Cuba")),
        player("Jose Abreu", 31.7, &["Chicago White Sox", "Houston Astros"], &["1B", "DH"], ["2014", "2024"], false, Some("Cuba")),
        player("Yoenis Cespedes", 25.8, &["Oakland Athletics", "Boston Red Sox", "Detroit Tigers", "New York Mets"], &["LF", "OF"], ["2012", "2020"], false, Some("Cuba")),
        player("Ronald Acuna Jr.", 35.2, &["Atlanta Braves"], &["RF", "OF"], ["2018", "2024"], false, Some("Venezuela")),
        player("Francisco Lindor", 42.8, &["Cleveland Guardians", "New York Mets"], &["SS"], ["2015", "2024"], false, Some("Puerto Rico")),
        player("Carlos Correa", 40.1, &["Houston Astros", "Minnesota Twins", "San Francisco Giants"], &["SS"], ["2015", "2024"], false, Some("Puerto Rico")),
        player("Javier Baez", 28.3, &["Chicago Cubs", "Detroit Tigers", "New York Mets"], &["SS", "2B"], ["2014", "2024"], false, Some("Puerto Rico")),
        player("Shohei Ohtani", 40.2, &["Los Angeles Angels", "Los Angeles Dodgers"], &["P", "DH", "OF"], ["2018", "2024"], false, Some("Japan")),
        player("Yu Darvish", 40.5, &["Texas Rangers", "Los Angeles Dodgers", "Chicago Cubs", "San Diego Padres"], &["P"], ["2012", "2024"], false, Some("Japan")),
        player("Masahiro Tanaka", 19.1, &["New York Yankees"], &["P"], ["2014", "2021"], false, Some("Japan")),
        player("Hideo Nomo", 19.3, &["Los Angeles Dodgers", "New York Mets", "Milwaukee Brewers", "Detroit Tigers", "Boston Red Sox", "Tampa Bay Devil Rays", "Kansas City Royals"], &["P"], ["1995", "2008"], false, Some("Japan")),
        player("Hideki Matsui", 21.4, &["New York Yankees", "Los Angeles Angels", "Oakland Athletics", "Tampa Bay Rays"], &["LF", "OF", "DH"], ["2003", "2012"], false, Some("Japan")),
    ]
}
