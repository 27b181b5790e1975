/// Field updates for a stored product. Values are signed so that negative
/// input reaches validation instead of failing to parse.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
