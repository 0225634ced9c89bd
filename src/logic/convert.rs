use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::model::{convert_price, ProductFlavor, ProductInstance, RawFlavor, RawInstance};

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("record does not match the catalog format: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("flavor '{flavor}' has a negative price ({price})")]
    NegativePrice { flavor: String, price: f64 },
}

/// A catalog record that could not be converted, with its position in the payload
#[derive(Debug, Error)]
#[error("catalog record #{index} is malformed: {source}")]
pub struct RecordError {
    pub index: usize,
    #[source]
    pub source: ConversionError,
}

/// Convert every record of a catalog payload, in source order.
///
/// A single bad record fails the whole batch; no partial catalog is returned.
pub fn convert_records(records: Vec<Value>) -> Result<Vec<ProductInstance>, RecordError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            convert_record(record).map_err(|source| RecordError { index, source })
        })
        .collect()
}

pub fn convert_record(record: Value) -> Result<ProductInstance, ConversionError> {
    let raw: RawInstance = serde_json::from_value(record)?;
    convert_instance(raw)
}

pub fn convert_instance(raw: RawInstance) -> Result<ProductInstance, ConversionError> {
    let instance_id = raw.variant.id;
    let mut flavors: Vec<ProductFlavor> = Vec::with_capacity(raw.flavors.len());

    for raw_flavor in raw.flavors {
        if flavors.iter().any(|f| f.name == raw_flavor.name) {
            warn!(
                "Dropping duplicate flavor '{}' of instance '{}'",
                raw_flavor.name, instance_id
            );
            continue;
        }
        flavors.push(convert_flavor(&instance_id, raw_flavor)?);
    }

    Ok(ProductInstance {
        id: instance_id,
        name: raw.variant.name,
        description: raw.description.unwrap_or_default(),
        logo: raw.variant.logo.unwrap_or_default(),
        enabled: raw.enabled,
        coming_soon: raw.coming_soon,
        flavors,
    })
}

fn convert_flavor(instance_id: &str, raw: RawFlavor) -> Result<ProductFlavor, ConversionError> {
    if raw.price < 0.0 {
        return Err(ConversionError::NegativePrice {
            flavor: raw.name,
            price: raw.price,
        });
    }

    Ok(ProductFlavor {
        instance_id: instance_id.to_string(),
        name: raw.name,
        price: convert_price(raw.price),
        mem: raw.mem,
        memory_formatted: raw.memory.map(|m| m.formatted).unwrap_or_default(),
        cpus: raw.cpus,
        gpus: raw.gpus,
        available: raw.available,
        microservice: raw.microservice,
        machine_learning: raw.machine_learning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, flavors: Value) -> Value {
        json!({
            "variant": {"id": id, "name": id.to_uppercase(), "logo": format!("https://cdn.test/{}.png", id)},
            "description": "test instance",
            "enabled": true,
            "comingSoon": true,
            "flavors": flavors,
        })
    }

    #[test]
    fn test_price_is_converted_and_back_reference_set() {
        let converted = convert_record(record(
            "gpu",
            json!([{"name": "small", "price": 10, "mem": 8, "memory": {"formatted": "8 GB"}, "cpus": 4, "gpus": 1, "available": true}]),
        ))
        .unwrap();

        assert_eq!(converted.id, "gpu");
        assert_eq!(converted.name, "GPU");
        assert_eq!(converted.logo, "https://cdn.test/gpu.png");
        assert!(converted.coming_soon);

        let small = &converted.flavors[0];
        assert_eq!(small.price, 419.04);
        assert_eq!(small.instance_id, converted.id);
        assert_eq!(small.memory_formatted, "8 GB");
        assert_eq!(small.gpus, 1);
        assert!(converted.owns(small));
    }

    #[test]
    fn test_source_order_is_preserved() {
        let catalog = convert_records(vec![
            record("zeta", json!([])),
            record("alpha", json!([])),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_flavor_names_keep_first() {
        let converted = convert_record(record(
            "cpu",
            json!([
                {"name": "small", "price": 1.0},
                {"name": "small", "price": 2.0},
                {"name": "large", "price": 3.0}
            ]),
        ))
        .unwrap();

        assert_eq!(converted.flavors.len(), 2);
        assert_eq!(converted.flavor("small").map(|f| f.price), Some(41.904));
    }

    #[test]
    fn test_malformed_record_fails_whole_batch() {
        let err = convert_records(vec![
            record("ok", json!([{"name": "small", "price": 1.0}])),
            json!({"description": "no variant"}),
            record("never-reached", json!([])),
        ])
        .unwrap_err();

        assert_eq!(err.index, 1);
        assert!(matches!(err.source, ConversionError::Decode(_)));
    }

    #[test]
    fn test_negative_price_is_malformed() {
        let err = convert_records(vec![record("cpu", json!([{"name": "weird", "price": -1.0}]))])
            .unwrap_err();

        assert_eq!(err.index, 0);
        match err.source {
            ConversionError::NegativePrice { flavor, price } => {
                assert_eq!(flavor, "weird");
                assert_eq!(price, -1.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
