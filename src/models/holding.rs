use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct Holding {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "ISIN")]
    isin: String,
    #[serde(rename = "Anzahl")]
    quantity: Decimal,
    #[serde(rename = "Kaufkurs")]
    average_price: Decimal,
    #[serde(rename = "Waehrung")]
    currency: String,
}
