use crate::error::AppResult;
use crate::models::Kind;
use crate::presenters;
use serde_json::Value;

/// A registered detail presenter for one kind.
#[derive(Copy, Clone)]
pub struct Entry {
    pub label: &'static str,
    pub present: fn(&Value) -> AppResult<String>,
}

/// Look up the presenter for a kind. The match is exhaustive on purpose:
/// adding a `Kind` variant will not compile until it is either registered
/// here or explicitly listed among the kinds without a detail page yet.
/// `None` is a normal outcome that renders the no-detail-page state.
pub fn lookup(kind: Kind) -> Option<Entry> {
    let entry = |present| Entry { label: kind.label(), present };
    match kind {
        Kind::Quest => Some(entry(presenters::quest::present)),
        Kind::Ship => Some(entry(presenters::ship::present)),
        Kind::Equipment => Some(entry(presenters::equipment::present)),
        Kind::Recipe => Some(entry(presenters::recipe::present)),
        Kind::Consumable => Some(entry(presenters::consumable::present)),
        Kind::Discovery => Some(entry(presenters::discovery::present)),
        Kind::City => Some(entry(presenters::city::present)),
        Kind::TradeGood => Some(entry(presenters::tradegood::present)),

        // No detail page shipped yet; these resolve to the explicit
        // no-presenter state rather than a crash or a generic error.
        Kind::Aide
        | Kind::Cannon
        | Kind::Certificate
        | Kind::CityNpc
        | Kind::CourtRank
        | Kind::Crest
        | Kind::Culture
        | Kind::DebateCombo
        | Kind::Dungeon
        | Kind::EquippedEffect
        | Kind::ExtraArmor
        | Kind::Field
        | Kind::Figurehead
        | Kind::Furniture
        | Kind::Ganador
        | Kind::GradeBonus
        | Kind::GradePerformance
        | Kind::InstallationEffect
        | Kind::Item
        | Kind::ItemEffect
        | Kind::Job
        | Kind::LandNpc
        | Kind::LegacyClue
        | Kind::LegacyTheme
        | Kind::Major
        | Kind::MarineNpc
        | Kind::MemorialAlbum
        | Kind::Nation
        | Kind::Npc
        | Kind::NpcSale
        | Kind::Ornament
        | Kind::Pet
        | Kind::PortPermit
        | Kind::PrivateFarm
        | Kind::RecipeBook
        | Kind::Region
        | Kind::Relic
        | Kind::RelicPiece
        | Kind::Research
        | Kind::SailorEquipment
        | Kind::Sea
        | Kind::ShipBaseMaterial
        | Kind::ShipDecor
        | Kind::ShipMaterial
        | Kind::ShipSkill
        | Kind::Shipwreck
        | Kind::Skill
        | Kind::SkillRefinementEffect
        | Kind::SpecialEquipment
        | Kind::StuddingSail
        | Kind::TarotCard
        | Kind::Technic
        | Kind::Technique
        | Kind::Title
        | Kind::TreasureMap => None,
    }
}
