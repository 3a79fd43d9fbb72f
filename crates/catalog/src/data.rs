//! Built-in product catalog.
//!
//! Hand-authored records mirroring the published product range. Free-text
//! `name`/`category` drive classification, so wording here is load-bearing:
//! renaming a product can move it between category views.

use std::sync::OnceLock;

use crate::product::{Product, ProductId, ProductVariant};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn variant(code: &str, name: &str, packing: &str, gst: &str, hsn: &str) -> ProductVariant {
    ProductVariant {
        product_code: code.to_string(),
        product_name: name.to_string(),
        packing_per_box: packing.to_string(),
        gst_percentage: gst.to_string(),
        hsn_code: hsn.to_string(),
    }
}

fn product(id: u32, name: &str, category: &str, slug: &str, description: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        slug: slug.to_string(),
        variants: Vec::new(),
        specs: Vec::new(),
        features: Vec::new(),
        applications: Vec::new(),
        certifications: Vec::new(),
        keywords: Vec::new(),
    }
}

/// The full catalog, in display order. Built once, read-only thereafter.
pub fn builtin() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(build).as_slice()
}

fn build() -> Vec<Product> {
    let mut products = Vec::new();

    let mut p = product(
        1,
        "3 Ply Face Masks",
        "Masks & Headwear",
        "3-ply-face-masks",
        "Three-layer disposable face masks with melt-blown filter media.",
    );
    p.variants = vec![
        variant("AP FM 01", "3 Ply Face Mask with Ear Loops", "100 pcs/box", "12%", "63079090"),
        variant("AP FM 02", "3 Ply Face Mask with Tie Bands", "100 pcs/box", "12%", "63079090"),
        variant("AP FM 03", "3 Ply Face Mask with Filter", "50 pcs/box", "12%", "63079090"),
        variant("AP FM 04", "4 Ply Face Mask with Ear Loops", "50 pcs/box", "12%", "63079090"),
        variant("AP FM 05", "Kids 3 Ply Face Mask", "100 pcs/box", "12%", "63079090"),
        variant("AP FM 06", "Anti-Fog 3 Ply Face Mask", "50 pcs/box", "12%", "63079090"),
    ];
    p.specs = strings(&["25 GSM spunbond outer layers", "BFE ≥ 98%"]);
    p.features = strings(&["Latex-free", "Adjustable nose clip"]);
    p.applications = strings(&["Operating rooms", "Outpatient care"]);
    p.certifications = strings(&["ISO 13485", "CE"]);
    p.keywords = strings(&["mask", "3 ply", "disposable"]);
    products.push(p);

    let mut p = product(
        2,
        "N95 Respirator",
        "Masks & Headwear",
        "n95-respirator",
        "NIOSH-style particulate respirators with ≥95% filtration efficiency.",
    );
    p.variants = vec![
        variant("AP N95 01", "N95 Respirator with Head Loops", "20 pcs/box", "12%", "63079090"),
        variant("AP N95 02", "N95 Respirator with Ear Loops", "20 pcs/box", "12%", "63079090"),
        variant("AP N95 03", "N95 Respirator with Valve", "10 pcs/box", "12%", "63079090"),
        variant("AP N95 99", "N95 Respirator Bulk Pack", "400 pcs/carton", "12%", "63079090"),
    ];
    p.specs = strings(&["5-layer construction", "PFE ≥ 95%"]);
    p.certifications = strings(&["ISO 13485", "CE"]);
    p.keywords = strings(&["n95", "respirator", "ffp2"]);
    products.push(p);

    let mut p = product(
        3,
        "Protective Goggles",
        "Masks & Headwear",
        "protective-goggles",
        "Anti-fog splash goggles with indirect venting.",
    );
    p.features = strings(&["Fits over prescription glasses"]);
    products.push(p);

    let mut p = product(
        4,
        "Surgical Hood",
        "Masks & Headwear",
        "surgical-hood",
        "Full-coverage hood for orthopaedic and implant procedures.",
    );
    p.applications = strings(&["Orthopaedic surgery"]);
    products.push(p);

    let mut p = product(
        5,
        "Bouffant Cap",
        "Masks & Headwear",
        "bouffant-cap",
        "Pleated bouffant caps in non-woven polypropylene.",
    );
    p.variants = vec![
        variant("AP BC 01", "21 Inch Bouffant Cap", "100 pcs/box", "12%", "65050090"),
        variant("AP BC 02", "24 Inch Bouffant Cap", "100 pcs/box", "12%", "65050090"),
    ];
    p.keywords = strings(&["cap", "bouffant", "headwear"]);
    products.push(p);

    products.push(product(
        6,
        "Surgeon Cap",
        "Masks & Headwear",
        "surgeon-cap",
        "Tie-back surgeon caps with absorbent front band.",
    ));

    let mut p = product(
        7,
        "Shoe Covers",
        "Protective Wear",
        "shoe-covers",
        "Slip-resistant disposable shoe covers.",
    );
    p.variants = vec![
        variant("AP SC 01", "PP Shoe Cover", "100 pcs/box", "12%", "63079090"),
        variant("AP SC 02", "CPE Shoe Cover", "100 pcs/box", "12%", "63079090"),
        variant("AP SC 03", "Anti-Skid Shoe Cover", "50 pairs/box", "12%", "63079090"),
    ];
    products.push(p);

    let mut p = product(
        8,
        "Shoe Leggings",
        "Protective Wear",
        "shoe-leggings",
        "Knee-high leggings with tie closure for fluid-heavy procedures.",
    );
    p.variants = vec![
        variant("AP SL 01", "Surgical Legging with Ties", "50 pairs/box", "12%", "63079090"),
    ];
    products.push(p);

    products.push(product(
        9,
        "Plastic Shoe Cover",
        "Protective Wear",
        "plastic-shoe-cover",
        "Economy CPE shoe cover for visitor areas.",
    ));

    let mut p = product(
        10,
        "Disposable Razor",
        "Prep & Shave",
        "disposable-razor",
        "Single-use prep razors with safety comb.",
    );
    p.specs = strings(&["Stainless steel blade"]);
    products.push(p);

    products.push(product(
        11,
        "Surgical Razor with Comb",
        "Prep & Shave",
        "surgical-razor-with-comb",
        "Twin-blade surgical prep razor with lather-retaining comb.",
    ));

    let mut p = product(
        12,
        "Reinforced Surgical Gown",
        "Gowns & Apparel",
        "reinforced-surgical-gown",
        "SMS surgical gowns with reinforced chest and forearms.",
    );
    p.specs = strings(&["43 GSM SMS", "AAMI Level 3"]);
    p.certifications = strings(&["ISO 13485", "CE"]);
    products.push(p);

    products.push(product(
        13,
        "SMS Wrap Around Gown with Towel",
        "Drapes & Linens",
        "sms-wrap-around-gown-with-towel",
        "Wrap-around gown packed sterile with a hand towel.",
    ));

    products.push(product(
        14,
        "Patient Gown",
        "Gowns & Apparel",
        "patient-gown",
        "Short-sleeve patient gowns with back ties.",
    ));

    let mut p = product(
        15,
        "Medical Coverall",
        "Gowns & Apparel",
        "medical-coverall",
        "Full-body coveralls with elastic hood and ankles.",
    );
    p.specs = strings(&["Type 5/6 microporous laminate"]);
    products.push(p);

    products.push(product(
        16,
        "Disposable Labcoat",
        "Gowns & Apparel",
        "disposable-labcoat",
        "Knee-length labcoats with knit cuffs.",
    ));

    products.push(product(
        17,
        "Scrub Suit",
        "Gowns & Apparel",
        "scrub-suit",
        "Two-piece scrub suits in soft spunlace.",
    ));

    let mut p = product(
        18,
        "Universal Surgical Drape",
        "Drapes & Linens",
        "universal-surgical-drape",
        "Fenestrated universal drapes with adhesive aperture.",
    );
    p.applications = strings(&["General surgery"]);
    products.push(p);

    products.push(product(
        19,
        "Ophthalmic Drape Pack",
        "Drapes & Linens",
        "ophthalmic-drape-pack",
        "Procedure pack for cataract and ophthalmic surgery.",
    ));

    products.push(product(
        20,
        "Delivery Kit",
        "Drapes & Linens",
        "delivery-kit",
        "Single-use delivery kit with underpads, towels and cord clamp.",
    ));

    products.push(product(
        21,
        "Bed Sheet",
        "Drapes & Linens",
        "bed-sheet",
        "Non-woven stretcher and bed sheets.",
    ));

    products.push(product(
        22,
        "Disposable Underpads",
        "Drapes & Linens",
        "disposable-underpads",
        "Absorbent underpads with fluid-proof backing.",
    ));

    products.push(product(
        23,
        "Sterilization Wrap",
        "Drapes & Linens",
        "sterilization-wrap",
        "SMS sterilization wrap for instrument trays.",
    ));

    let mut p = product(
        24,
        "Nitrile Examination Gloves",
        "Gloves",
        "nitrile-examination-gloves",
        "Powder-free nitrile examination gloves.",
    );
    p.specs = strings(&["EN 455", "Powder-free"]);
    p.keywords = strings(&["gloves", "nitrile", "examination"]);
    products.push(p);

    products.push(product(
        25,
        "Latex Surgical Gloves",
        "Gloves",
        "latex-surgical-gloves",
        "Sterile powdered latex surgical gloves.",
    ));

    products.push(product(
        26,
        "Biohazard Waste Bags",
        "Waste Management",
        "biohazard-waste-bags",
        "Colour-coded biomedical waste collection bags.",
    ));

    products.push(product(
        27,
        "Kidney Tray",
        "Hospital Essentials",
        "kidney-tray",
        "Single-use pulp kidney trays.",
    ));

    products
}
