#![allow(dead_code)]

use chrono::NaiveDate;
use sales_dashboard::models::{Dataset, OrderRecord};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builder for one order line; defaults mirror a typical Superstore row.
pub struct RecordBuilder {
    record: OrderRecord,
}

impl RecordBuilder {
    pub fn new(order_id: &str, order_date: NaiveDate) -> Self {
        Self {
            record: OrderRecord {
                order_id: order_id.to_string(),
                customer_id: "CG-12520".to_string(),
                order_date,
                ship_mode: "Standard Class".to_string(),
                segment: "Consumer".to_string(),
                region: "East".to_string(),
                category: "Office Supplies".to_string(),
                product_name: "Xerox 1967".to_string(),
                sales: 0.0,
                profit: 0.0,
                quantity: None,
                discount: None,
            },
        }
    }

    pub fn customer(mut self, customer_id: &str) -> Self {
        self.record.customer_id = customer_id.to_string();
        self
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.record.segment = segment.to_string();
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.record.region = region.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.record.category = category.to_string();
        self
    }

    pub fn ship_mode(mut self, ship_mode: &str) -> Self {
        self.record.ship_mode = ship_mode.to_string();
        self
    }

    pub fn product(mut self, product_name: &str) -> Self {
        self.record.product_name = product_name.to_string();
        self
    }

    pub fn amounts(mut self, sales: f64, profit: f64) -> Self {
        self.record.sales = sales;
        self.record.profit = profit;
        self
    }

    pub fn build(self) -> OrderRecord {
        self.record
    }
}

/// The three-row dataset: two lines of order A in January, order B in February.
pub fn three_row_dataset() -> Dataset {
    Dataset::from_records(vec![
        RecordBuilder::new("A", date(2019, 1, 5))
            .segment("Consumer")
            .region("East")
            .category("Furniture")
            .product("Chair")
            .amounts(100.0, 10.0)
            .build(),
        RecordBuilder::new("A", date(2019, 1, 5))
            .segment("Consumer")
            .region("East")
            .category("Office Supplies")
            .product("Binder")
            .amounts(50.0, 5.0)
            .build(),
        RecordBuilder::new("B", date(2019, 2, 10))
            .segment("Corporate")
            .region("West")
            .category("Technology")
            .product("Phone")
            .amounts(200.0, -20.0)
            .build(),
    ])
}

/// A broader dataset spanning several years, segments, regions and products.
pub fn sample_dataset() -> Dataset {
    let segments = ["Consumer", "Corporate", "Home Office"];
    let regions = ["Central", "East", "South", "West"];
    let categories = ["Furniture", "Office Supplies", "Technology"];
    let ship_modes = ["First Class", "Second Class", "Standard Class", "Same Day"];

    let mut records = Vec::new();
    for i in 0..60u32 {
        let year = 2017 + (i % 4) as i32;
        let month = 1 + (i * 5) % 12;
        let day = 1 + (i * 7) % 28;
        records.push(
            RecordBuilder::new(&format!("ORD-{}", i / 2), date(year, month, day))
                .customer(&format!("CUST-{}", i % 9))
                .segment(segments[(i % 3) as usize])
                .region(regions[(i % 4) as usize])
                .category(categories[(i % 3) as usize])
                .ship_mode(ship_modes[(i % 4) as usize])
                .product(&format!("Product {}", i % 13))
                .amounts(10.0 + f64::from(i * 17 % 50), f64::from(i % 7) - 3.0)
                .build(),
        );
    }
    Dataset::from_records(records)
}
