//! Lot records as extracted from an auction page.
//!
//! A [`LotRecord`] always carries every column, even when nothing was
//! extracted for it, so every row of `data_all.csv` shares one schema.

pub const COL_LOT_ID: &str = "Lot ID";
pub const COL_LOT_NO: &str = "Lot No";
pub const COL_TITLE: &str = "Title";
pub const COL_DETAILS_LINK: &str = "Lot Details Link";
pub const COL_PRICE: &str = "Price";

/// A labeled attribute embedded in a lot's free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotAttribute {
    Upc,
    Brand,
    Model,
    ColorFamily,
    ColorFinish,
    CommercialResidential,
    EdgeType,
    PiecesPerCase,
    PlankLength,
    PlankWidth,
    ProductWeightLb,
    ApproximatePlankSizeIn,
    ProductLengthIn,
    ProductThicknessMm,
    ProductWidthIn,
    WearLayerThicknessMil,
}

impl LotAttribute {
    /// Every attribute, in output column order.
    pub const ALL: [LotAttribute; 16] = [
        LotAttribute::Upc,
        LotAttribute::Brand,
        LotAttribute::Model,
        LotAttribute::ColorFamily,
        LotAttribute::ColorFinish,
        LotAttribute::CommercialResidential,
        LotAttribute::EdgeType,
        LotAttribute::PiecesPerCase,
        LotAttribute::PlankLength,
        LotAttribute::PlankWidth,
        LotAttribute::ProductWeightLb,
        LotAttribute::ApproximatePlankSizeIn,
        LotAttribute::ProductLengthIn,
        LotAttribute::ProductThicknessMm,
        LotAttribute::ProductWidthIn,
        LotAttribute::WearLayerThicknessMil,
    ];

    /// CSV column header for this attribute.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            LotAttribute::Upc => "UPC",
            LotAttribute::Brand => "Brand",
            LotAttribute::Model => "Model",
            LotAttribute::ColorFamily => "Color Family",
            LotAttribute::ColorFinish => "Color/Finish",
            LotAttribute::CommercialResidential => "Commercial/Residential",
            LotAttribute::EdgeType => "Edge Type",
            LotAttribute::PiecesPerCase => "Pieces Per Case",
            LotAttribute::PlankLength => "Plank Length",
            LotAttribute::PlankWidth => "Plank Width",
            LotAttribute::ProductWeightLb => "Product Weight (lb.)",
            LotAttribute::ApproximatePlankSizeIn => "Approximate Plank Size (in.)",
            LotAttribute::ProductLengthIn => "Product Length (in.)",
            LotAttribute::ProductThicknessMm => "Product Thickness (mm)",
            LotAttribute::ProductWidthIn => "Product Width (in.)",
            LotAttribute::WearLayerThicknessMil => "Wear Layer Thickness (mil)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-size set of attribute values. Unextracted attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotAttributes {
    values: [String; 16],
}

impl LotAttributes {
    #[must_use]
    pub fn get(&self, attribute: LotAttribute) -> &str {
        &self.values[attribute.index()]
    }

    pub fn set(&mut self, attribute: LotAttribute, value: impl Into<String>) {
        self.values[attribute.index()] = value.into();
    }

    /// Number of attributes with a non-empty value.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }
}

/// One auction lot, with every field defaulting to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotRecord {
    /// Site-assigned opaque identifier (`data-lotid`).
    pub lot_id: String,
    /// Lot number as it appeared on the page (`data-lotnumber`).
    pub lot_no: String,
    pub title: String,
    /// Absolute URL of the lot's detail page.
    pub details_link: String,
    /// Current or winning bid, verbatim, e.g. `"$1,234.50"`.
    pub price: String,
    pub attributes: LotAttributes,
}

impl LotRecord {
    #[must_use]
    pub fn new(lot_id: impl Into<String>, lot_no: impl Into<String>) -> Self {
        Self {
            lot_id: lot_id.into(),
            lot_no: lot_no.into(),
            ..Self::default()
        }
    }

    /// Column headers of `data_all.csv`, in order.
    #[must_use]
    pub fn headers() -> Vec<&'static str> {
        let mut headers = vec![COL_LOT_ID, COL_LOT_NO, COL_TITLE, COL_DETAILS_LINK, COL_PRICE];
        headers.extend(LotAttribute::ALL.iter().map(|a| a.column()));
        headers
    }

    /// Cells of this record, aligned with [`LotRecord::headers`].
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.lot_id.clone(),
            self.lot_no.clone(),
            self.title.clone(),
            self.details_link.clone(),
            self.price.clone(),
        ];
        row.extend(
            LotAttribute::ALL
                .iter()
                .map(|a| self.attributes.get(*a).to_string()),
        );
        row
    }
}
