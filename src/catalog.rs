//! Built-in achievement catalog
//!
//! Achievement list from https://twistedvoxel.com/elden-ring-all-trophies-and-achievements-guide/
//! Legendary item locations from https://eldenring.wiki.fextralife.com/Trophy+&+Achievement+Guide

/// Immutable source data for the generator
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// (achievement name, how to unlock)
    pub achievements: &'static [(&'static str, &'static str)],
    /// (category key, [(item name, where to find it)])
    pub legendaries: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    /// (achievement name, wiki page name) for pages the derived slug misses
    pub url_overrides: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            achievements: ACHIEVEMENTS,
            legendaries: LEGENDARIES,
            url_overrides: URL_OVERRIDES,
        }
    }

    /// Look up a legendary category table by key (e.g. "ashen remains")
    pub fn legendary_items(&self, category: &str) -> Option<&'static [(&'static str, &'static str)]> {
        self.legendaries
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, items)| *items)
    }
}

const ACHIEVEMENTS: &[(&str, &str)] = &[
    ("Age of the Stars", "Achieved the \"Age of the Stars\" ending"),
    ("Ancestor Spirit", "Defeated Ancestor Spirit"),
    ("Astel, Naturalborn of the Void", "Defeated Astel, Naturalborn of the Void"),
    ("Commander Niall", "Defeated Commander Niall"),
    ("Dragonkin Soldier of Nokstella", "Defeated Dragonkin Soldier of Nokstella"),
    ("Dragonlord Placidusax", "Defeated Dragonlord Placidusax"),
    ("Elden Lord", "Achieved the \"Elden Lord\" ending"),
    ("Elden Ring", "Obtained all trophies"),
    ("Elemer of the Briar", "Defeated Elemer of the Briar"),
    ("Erdtree Aflame", "Used kindling to set the Erdtree aflame"),
    ("Fire Giant", "Defeated Fire Giant"),
    ("God-Slaying Armament", "Upgraded any armament to its highest stage"),
    ("Godfrey, the First Lord", "Defeated Godfrey the First Lord"),
    ("Godskin Duo", "Defeated Goskin Duo"),
    ("Godskin Noble", "Defeated Goskin Noble"),
    ("Great Rune", "Restored the power of a Great Rune"),
    ("Hoarah Loux the Warrior", "Defeated Hoarah Loux the Warrior"),
    ("Legendary Armaments", "Acquired all legendary armaments"),
    ("Legendary Ashen Remains", "Acquired all legendary ashen remains"),
    (
        "Legendary Sorceries and Incantations",
        "Acquired all legendary sorceries and incantations",
    ),
    ("Legendary Talismans", "Acquired all legendary talismans"),
    ("Leonine Misbegotten", "Defeated the Leonine Misbegotten"),
    ("Lichdragon Fortissax", "Defeated Lichdragon Fortissax"),
    ("Lord of Frenzied Flame", "Achieved the \"Lord of the Frenzied Flame\" ending"),
    ("Loretta, Knight of the Haligtree", "Defeated Loretta, Knight of the Haligtree"),
    ("Magma Wyrm Makar", "Defeated Magma Wyrm Makar"),
    ("Maliketh, the Black Blade", "DefeatedShardbearer Maliketh, the Black Blade"),
    ("Margit, the Fell Omen", "Defeated Margit, the Fell Omen"),
    ("Mimic Tear", "Defeated Mimic Tear"),
    ("Mohg, the Omen", "Defeated Mohg, the Omen"),
    ("Red Wolf of Radagon", "Defeated the Red Wolf of Radagon"),
    ("Regal Ancestor Spirit", "Defeated Regal Ancestor Spirit"),
    ("Rennala, Queen of the Full Moon", "Defeated Rennala, Queen of the Full Moon"),
    ("Roundtable Hold", "Arrived at Roundtable Hold"),
    ("Royal Knight Loretta", "Defeated Royal Knight Loretta"),
    ("Shardbearer Godrick", "Defeated Shardbearer Godrick"),
    ("Shardbearer Melania", "Defeated Shardbearer Malenia"),
    ("Shardbearer Mohg", "Defeated Shardbearer Mohg"),
    ("Shardbearer Morgott", "Defeated Shardbearer Morgott"),
    ("Shardbearer Radahn", "Defeated Shardbearer Radahn"),
    ("Shardbearer Rykard", "Defeated Shardbearer Rykard"),
    ("Valiant Gargoyle", "Defeated Valiant Gargoyle"),
];

const LEGENDARIES: &[(&str, &[(&str, &str)])] = &[
    (
        "armaments",
        &[
            ("Ruins Greatsword", "Defeat the Misbegotten Warrior and Crucible Knight in Redmane Castle"),
            ("Eclipse Shotel", "Chest in Castle Sol"),
            ("Grafted Blade Greatsword", "Kill Leonine Misbegotten in Castle Morne"),
            ("Sword of Night and Flame", "Chest in the Carian Manor"),
            ("Marais Executioner's Sword", "Kill Elemer of the Briar in The Shaded Castle"),
            ("Dark Moon Greatsword", "Follow Ranni's quest until the Moonlight Altar"),
            ("Devourer's Scepter", "Kill Invader Bernahl in Farum Azula"),
            ("Golden Order Greatsword", "Kill Misbegotten Crusader in the Cave of the Forlorn"),
            ("Bolt of Gransax", "Loot on the Giant spear in Leyndell"),
        ],
    ),
    (
        "ashen remains",
        &[
            ("Lhutel the Headless", "Dropped by the Cemetery Shade at the Tombsward Catacombs"),
            (
                "Black Knife Tiche",
                "Dropped by Alecto, Black Knife Ringleader upon defeat at the Ringleader's Evergaol",
            ),
            ("Redmane Knight Ogha Ashes", "Dropped by Putrid Tree Spirit in the War Dead Catacombs"),
            (
                "Mimic Tear",
                "Found in a chest locked behind an imp statue door in Night's Sacred Ground",
            ),
            (
                "Ancient Dragon Knight Kristoff Ashes",
                "Can be found in Sainted Hero's Grave west of Leyndell, the Royal Capital",
            ),
            (
                "Cleanrot Knight Finlay Ashes",
                "Found in a chest protected by a knight in Elphael, Brace of the Haligtree",
            ),
        ],
    ),
    (
        "sorceries and incantations",
        &[
            ("Flame of the Fell God", "Dropped by Adan, Thief of Fire upon defeat"),
            (
                "Greyoll's Roar",
                "Can be purchased at the Cathedral of Dragon Communion for a Dragon Heart after defeating Greyoll",
            ),
            ("Elden Stars", "Can be found near the Great Waterfall Crest Site of Grace"),
            (
                "Founding Rain of Stars",
                "Inside a chest within Heretical Rise, in Mountaintops of the Giants",
            ),
            ("Ranni's Dark Moon", "Found in a chest at the top of the tower at Chelona's Rise"),
            (
                "Comet Azur",
                "Acquired from Primeval Sorcerer Azur sitting near the cliffs in the northeast of Hermit Village in Mt. Gelmir",
            ),
            (
                "Stars of Ruin",
                "Given by Master Lusat when interacted with inside the Sellia Hideaway in Caelid",
            ),
        ],
    ),
    (
        "talismans",
        &[
            (
                "Radagon Icon",
                "Found inside a treasure chest on the second floor of the Debate Parlor Site of Grace",
            ),
            ("Radagon's Soreseal", "Found on a corpse in Fort Faroth"),
            ("Godfrey Icon", "Drops from Godefroy the Grafted in the Golden Lineage Evergaol"),
            (
                "Moon of Nokstella",
                "Found in a chest underneath a massive throne in Nokstella, Eternal City",
            ),
            (
                "Dragoncrest Greatshield Talisman",
                "Found in a chest near the Drainage Channel Site of Grace.",
            ),
            (
                "Marika's Soreseal",
                "Found on an altar in a room requiring a Stonesword Key in Elphael, Brace of the Haligtree",
            ),
            ("Old Lord's Talisman", "Found in a chest in Crumbling Farum Azula"),
            (
                "Erdtree's Favor +2",
                "Found on a dead tree in Leyndell, Ashen Capital (endgame/post-game)",
            ),
        ],
    ),
];

// Boss pages whose achievement name doesn't match the wiki page name
const URL_OVERRIDES: &[(&str, &str)] = &[
    ("Hoarah Loux the Warrior", "Godfrey,+First+Elden+Lord"),
    ("Shardbearer Godrick", "Godrick+the+Grafted"),
    ("Shardbearer Melania", "Malenia+Blade+of+Miquella"),
    ("Shardbearer Mohg", "Mohg,+Lord+of+Blood"),
    ("Shardbearer Morgott", "Morgott+the+Omen+King"),
    ("Shardbearer Radahn", "Starscourge+Radahn"),
    ("Shardbearer Rykard", "Rykard,+Lord+of+Blasphemy"),
];
