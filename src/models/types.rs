use serde::{Deserialize, Serialize};

/// Opaque identifier in the backend's flat id space. A single numbering covers
/// every entity kind, which is what makes the generic `/obj/{id}` route work.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for EntityId {
    type Err = core::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Sort direction as used in `sort_order` URL and backend parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

macro_rules! define_kinds {
    ($( $variant:ident => $tag:literal, $label:literal; )+) => {
        /// Discriminator for every entity schema the backend serves. The tag
        /// strings match the `category` column of the backend's master table,
        /// which is also what `/api/obj/{id}` returns as `type`.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Kind {
            $( $variant, )+
        }

        impl Kind {
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(Kind::$variant), )+
                    _ => None,
                }
            }

            pub fn tag(&self) -> &'static str {
                match self {
                    $( Kind::$variant => $tag, )+
                }
            }

            /// Human-facing display name, shown in detail titles and the
            /// unsupported-kind page.
            pub fn label(&self) -> &'static str {
                match self {
                    $( Kind::$variant => $label, )+
                }
            }
        }
    };
}

define_kinds! {
    Aide => "aide", "Aide";
    Cannon => "cannon", "Cannon";
    Certificate => "certificate", "Certificate";
    City => "city", "City";
    CityNpc => "citynpc", "City NPC";
    Consumable => "consumable", "Consumable";
    CourtRank => "courtrank", "Court Rank";
    Crest => "crest", "Crest";
    Culture => "culture", "Culture";
    DebateCombo => "debatecombo", "Debate Combo";
    Discovery => "discovery", "Discovery";
    Dungeon => "dungeon", "Dungeon";
    Equipment => "equipment", "Equipment";
    EquippedEffect => "equippedeffect", "Equipped Effect";
    ExtraArmor => "extraarmor", "Extra Armor";
    Field => "field", "Field";
    Figurehead => "figurehead", "Figurehead";
    Furniture => "furniture", "Furniture";
    Ganador => "ganador", "Ganador";
    GradeBonus => "gradebonus", "Grade Bonus";
    GradePerformance => "gradeperformance", "Grade Performance";
    InstallationEffect => "installationeffect", "Installation Effect";
    Item => "item", "Item";
    ItemEffect => "itemeffect", "Item Effect";
    Job => "job", "Job";
    LandNpc => "landnpc", "Land NPC";
    LegacyClue => "legacyclue", "Legacy Clue";
    LegacyTheme => "legacytheme", "Legacy Theme";
    Major => "major", "Major";
    MarineNpc => "marinenpc", "Marine NPC";
    MemorialAlbum => "memorialalbum", "Memorial Album";
    Nation => "nation", "Nation";
    Npc => "npc", "NPC";
    NpcSale => "npcsale", "NPC Sale";
    Ornament => "ornament", "Ornament";
    Pet => "pet", "Pet";
    PortPermit => "portpermit", "Port Permit";
    PrivateFarm => "privatefarm", "Private Farm";
    Quest => "quest", "Quest";
    Recipe => "recipe", "Recipe";
    RecipeBook => "recipeBook", "Recipe Book";
    Region => "region", "Region";
    Relic => "relic", "Relic";
    RelicPiece => "relicpiece", "Relic Piece";
    Research => "research", "Research";
    SailorEquipment => "sailorequipment", "Sailor Equipment";
    Sea => "sea", "Sea";
    Ship => "ship", "Ship";
    ShipBaseMaterial => "shipbasematerial", "Ship Base Material";
    ShipDecor => "shipdecor", "Ship Decor";
    ShipMaterial => "shipmaterial", "Ship Material";
    ShipSkill => "shipskill", "Ship Skill";
    Shipwreck => "shipwreck", "Shipwreck";
    Skill => "skill", "Skill";
    SkillRefinementEffect => "skillrefinementeffect", "Skill Refinement Effect";
    SpecialEquipment => "specialequipment", "Special Equipment";
    StuddingSail => "studdingsail", "Studding Sail";
    TarotCard => "tarotcard", "Tarot Card";
    Technic => "technic", "Technic";
    Technique => "technique", "Technique";
    Title => "title", "Title";
    TradeGood => "tradeGoods", "Trade Good";
    TreasureMap => "treasuremap", "Treasure Map";
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_tag_round_trip() {
        for kind in [Kind::Quest, Kind::Ship, Kind::RecipeBook, Kind::TradeGood] {
            assert_eq!(Kind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn t_unknown_tag() {
        assert_eq!(Kind::from_tag("petdragon"), None);
        assert_eq!(Kind::from_tag(""), None);
    }

    #[test]
    fn t_sort_dir() {
        assert_eq!(SortDir::parse("asc"), Some(SortDir::Asc));
        assert_eq!(SortDir::parse("desc"), Some(SortDir::Desc));
        assert_eq!(SortDir::parse("sideways"), None);
        assert_eq!(SortDir::Asc.flipped(), SortDir::Desc);
    }
}
