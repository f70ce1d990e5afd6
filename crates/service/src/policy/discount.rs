use serde::{Deserialize, Serialize};

/// Price adjustment for one kind of customer.
pub trait DiscountCalculator: Send + Sync {
    fn calculate(&self, price: f64) -> f64;
}

/// No discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularCustomerDiscount;

impl DiscountCalculator for RegularCustomerDiscount {
    fn calculate(&self, price: f64) -> f64 { price }
}

/// 10% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoyalCustomerDiscount;

impl DiscountCalculator for LoyalCustomerDiscount {
    fn calculate(&self, price: f64) -> f64 { price * 0.90 }
}

/// 20% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct VipCustomerDiscount;

impl DiscountCalculator for VipCustomerDiscount {
    fn calculate(&self, price: f64) -> f64 { price * 0.80 }
}

/// 5% off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewCustomerDiscount;

impl DiscountCalculator for NewCustomerDiscount {
    fn calculate(&self, price: f64) -> f64 { price * 0.95 }
}

pub fn final_price(price: f64, calculator: &dyn DiscountCalculator) -> f64 {
    calculator.calculate(price)
}

/// Wire-level name of a discount strategy, resolved once at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Regular,
    Loyal,
    Vip,
    New,
}

impl CustomerTier {
    pub fn calculator(self) -> Box<dyn DiscountCalculator> {
        match self {
            CustomerTier::Regular => Box::new(RegularCustomerDiscount),
            CustomerTier::Loyal => Box::new(LoyalCustomerDiscount),
            CustomerTier::Vip => Box::new(VipCustomerDiscount),
            CustomerTier::New => Box::new(NewCustomerDiscount),
        }
    }
}
