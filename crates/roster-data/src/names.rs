//! Name component pools for synthetic players.
//!
//! Both pools mix Anglo and international names to match the league's
//! demographic history.

pub const FIRST_NAMES: &[&str] = &[
    "James",
    "John",
    "Robert",
    "Michael",
    "William",
    "David",
    "Richard",
    "Joseph",
    "Thomas",
    "Charles",
    "Christopher",
    "Daniel",
    "Matthew",
    "Anthony",
    "Mark",
    "Donald",
    "Steven",
    "Paul",
    "Andrew",
    "Joshua",
    "Jose",
    "Carlos",
    "Miguel",
    "Juan",
    "Luis",
    "Francisco",
    "Jorge",
    "Roberto",
    "Rafael",
    "Fernando",
    "Ichiro",
    "Hideki",
    "Hideo",
    "Masahiro",
    "Yu",
    "Shohei",
    "Roki",
    "Munetaka",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Wilson",
    "Anderson",
    "Thomas",
    "Taylor",
    "Moore",
    "Jackson",
    "Martin",
    "Lee",
    "Gonzalez",
    "Harris",
    "Clark",
    "Lewis",
    "Robinson",
    "Walker",
    "Perez",
    "Hall",
    "Young",
    "Allen",
    "Suzuki",
    "Tanaka",
    "Matsui",
    "Nomo",
    "Darvish",
    "Ohtani",
    "Sasaki",
    "Irabu",
];
