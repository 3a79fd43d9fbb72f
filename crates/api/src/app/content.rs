//! Translation tables for server-rendered labels.
//!
//! Tables are partial on purpose: anything missing falls back to English
//! in the resolver, and English-content markets never read them at all.

use apmed_catalog::CategoryKind;
use apmed_locale::Translations;

/// Label translations for one category button.
pub fn category_label_translations(kind: CategoryKind) -> Translations {
    match kind {
        CategoryKind::All => Translations::new()
            .with("de", "Alle Produkte")
            .with("fr", "Tous les produits")
            .with("ja", "すべての製品")
            .with("zh", "全部产品")
            .with("pt", "Todos os produtos"),
        CategoryKind::Razors => Translations::new()
            .with("de", "Rasierer")
            .with("fr", "Rasoirs")
            .with("ja", "カミソリ")
            .with("zh", "剃刀")
            .with("pt", "Lâminas"),
        CategoryKind::FaceMasks => Translations::new()
            .with("de", "Gesichtsmasken")
            .with("fr", "Masques")
            .with("ja", "フェイスマスク")
            .with("zh", "口罩")
            .with("pt", "Máscaras"),
        CategoryKind::SurgicalCaps => Translations::new()
            .with("de", "OP-Hauben")
            .with("fr", "Charlottes")
            .with("ja", "サージカルキャップ")
            .with("zh", "手术帽")
            .with("pt", "Toucas cirúrgicas"),
        CategoryKind::ShoeCovers => Translations::new()
            .with("de", "Überschuhe")
            .with("fr", "Couvre-chaussures")
            .with("ja", "シューズカバー")
            .with("zh", "鞋套")
            .with("pt", "Propés"),
        CategoryKind::SurgicalGowns => Translations::new()
            .with("de", "OP-Kittel")
            .with("fr", "Blouses chirurgicales")
            .with("ja", "手術用ガウン")
            .with("zh", "手术衣")
            .with("pt", "Aventais cirúrgicos"),
        CategoryKind::MedicalCoveralls => Translations::new()
            .with("de", "Schutzanzüge")
            .with("fr", "Combinaisons")
            .with("ja", "防護服")
            .with("zh", "防护服")
            .with("pt", "Macacões"),
        CategoryKind::Drapes => Translations::new()
            .with("de", "Abdecktücher")
            .with("fr", "Champs opératoires")
            .with("ja", "ドレープ")
            .with("zh", "手术铺单")
            .with("pt", "Campos cirúrgicos"),
        CategoryKind::Sheets => Translations::new()
            .with("de", "Laken")
            .with("fr", "Draps")
            .with("ja", "シーツ")
            .with("zh", "床单")
            .with("pt", "Lençóis"),
        CategoryKind::Gloves => Translations::new()
            .with("de", "Handschuhe")
            .with("fr", "Gants")
            .with("ja", "手袋")
            .with("zh", "手套")
            .with("pt", "Luvas"),
        CategoryKind::Miscellaneous => Translations::new()
            .with("de", "Sonstiges")
            .with("fr", "Divers")
            .with("ja", "その他")
            .with("zh", "其他")
            .with("pt", "Diversos"),
    }
}
