use crate::domain::model::{Quote, ServiceTier};

/// Per-tier pricing coefficients, approximated from the Correios price
/// tables for packages up to 1kg with standard dimensions.
struct TierRates {
    base_cost: f64,
    cost_per_zone: f64,
    cost_per_kg: f64,
    base_days: u32,
    zones_per_day: u32,
    max_days: u32,
}

impl ServiceTier {
    fn rates(self) -> TierRates {
        match self {
            // PAC: R$ 18-45 dependendo da distância
            ServiceTier::Pac => TierRates {
                base_cost: 18.0,
                cost_per_zone: 0.8,
                cost_per_kg: 10.0,
                base_days: 7,
                zones_per_day: 10,
                max_days: 15,
            },
            // SEDEX: R$ 25-70 dependendo da distância
            ServiceTier::Sedex => TierRates {
                base_cost: 25.0,
                cost_per_zone: 1.5,
                cost_per_kg: 15.0,
                base_days: 2,
                zones_per_day: 15,
                max_days: 5,
            },
        }
    }

    /// Prices one tier for a given distance proxy and weight. Pure
    /// arithmetic; never fails.
    pub fn quote_for(self, distance: u32, peso_kg: f64) -> Quote {
        let rates = self.rates();

        let valor = round_cents(
            rates.base_cost + f64::from(distance) * rates.cost_per_zone + peso_kg * rates.cost_per_kg,
        );
        let prazo = (rates.base_days + distance / rates.zones_per_day).min(rates.max_days);

        Quote {
            servico: self,
            valor,
            prazo,
        }
    }
}

/// Quotes every tier for the given distance proxy and weight, PAC first.
pub fn price(distance: u32, peso_kg: f64) -> Vec<Quote> {
    ServiceTier::ALL
        .iter()
        .map(|tier| tier.quote_for(distance, peso_kg))
        .collect()
}

fn round_cents(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}
