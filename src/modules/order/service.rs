use super::repository::OrderDish;
use crate::utils::validation;
use serde_json::{Map, Value};

/// A validated order body, ready to be written to the store.
#[derive(Debug, PartialEq)]
pub struct OrderBody {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

#[derive(Debug, PartialEq)]
pub enum OrderBodyError {
    MissingField(&'static str),
    NoDishes,
    InvalidQuantity(usize),
}

/// Runs the order body checks shared by create and update. Checks run
/// in a fixed order and the first failure wins: deliverTo, then
/// mobileNumber, then the dishes list, then each dish's quantity.
pub fn parse_order_body(data: &Map<String, Value>) -> Result<OrderBody, OrderBodyError> {
    let deliver_to = validation::non_empty_string(data, "deliverTo")
        .ok_or(OrderBodyError::MissingField("deliverTo"))?;
    let mobile_number = validation::non_empty_string(data, "mobileNumber")
        .ok_or(OrderBodyError::MissingField("mobileNumber"))?;
    if !validation::is_present(data, "dishes") {
        return Err(OrderBodyError::MissingField("dishes"));
    }

    let items = data
        .get("dishes")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(OrderBodyError::NoDishes)?;

    let mut dishes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let quantity_ok = item
            .as_object()
            .is_some_and(|fields| validation::positive_number(fields, "quantity").is_some());
        if !quantity_ok {
            return Err(OrderBodyError::InvalidQuantity(index));
        }

        let dish = serde_json::from_value::<OrderDish>(item.clone())
            .map_err(|_| OrderBodyError::InvalidQuantity(index))?;
        dishes.push(dish);
    }

    Ok(OrderBody {
        deliver_to: deliver_to.to_string(),
        mobile_number: mobile_number.to_string(),
        dishes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().expect("expected an object").clone()
    }

    #[test]
    fn the_first_missing_field_wins() {
        assert_eq!(
            parse_order_body(&data(json!({}))),
            Err(OrderBodyError::MissingField("deliverTo"))
        );
        assert_eq!(
            parse_order_body(&data(json!({ "deliverTo": "12 Main St" }))),
            Err(OrderBodyError::MissingField("mobileNumber"))
        );
        assert_eq!(
            parse_order_body(&data(json!({
                "deliverTo": "12 Main St",
                "mobileNumber": "555-1234",
            }))),
            Err(OrderBodyError::MissingField("dishes"))
        );
    }

    #[test]
    fn falsy_fields_count_as_missing() {
        assert_eq!(
            parse_order_body(&data(json!({
                "deliverTo": "",
                "mobileNumber": "555-1234",
                "dishes": [{ "quantity": 1 }],
            }))),
            Err(OrderBodyError::MissingField("deliverTo"))
        );
        assert_eq!(
            parse_order_body(&data(json!({
                "deliverTo": "12 Main St",
                "mobileNumber": "555-1234",
                "dishes": 0,
            }))),
            Err(OrderBodyError::MissingField("dishes"))
        );
    }

    #[test]
    fn dishes_must_be_a_non_empty_array() {
        for dishes in [json!([]), json!("not a list"), json!({ "quantity": 1 })] {
            assert_eq!(
                parse_order_body(&data(json!({
                    "deliverTo": "12 Main St",
                    "mobileNumber": "555-1234",
                    "dishes": dishes,
                }))),
                Err(OrderBodyError::NoDishes)
            );
        }
    }

    #[test]
    fn every_dish_needs_a_positive_numeric_quantity() {
        for quantity in [json!(null), json!(0), json!(-1), json!("3"), json!(true)] {
            assert_eq!(
                parse_order_body(&data(json!({
                    "deliverTo": "12 Main St",
                    "mobileNumber": "555-1234",
                    "dishes": [{ "name": "Pasta", "quantity": quantity }],
                }))),
                Err(OrderBodyError::InvalidQuantity(0))
            );
        }
    }

    #[test]
    fn the_first_bad_dish_is_reported() {
        assert_eq!(
            parse_order_body(&data(json!({
                "deliverTo": "12 Main St",
                "mobileNumber": "555-1234",
                "dishes": [{ "quantity": 2 }, { "quantity": 0 }, "not a dish"],
            }))),
            Err(OrderBodyError::InvalidQuantity(1))
        );
    }

    #[test]
    fn a_valid_body_keeps_the_extra_dish_fields() {
        let body = parse_order_body(&data(json!({
            "deliverTo": "12 Main St",
            "mobileNumber": "555-1234",
            "dishes": [{ "id": "d1", "name": "Pasta", "price": 12, "quantity": 2 }],
        })))
        .expect("body should validate");

        assert_eq!(body.deliver_to, "12 Main St");
        assert_eq!(body.mobile_number, "555-1234");
        assert_eq!(body.dishes.len(), 1);
        assert_eq!(body.dishes[0].quantity, 2.into());
        assert_eq!(body.dishes[0].dish.get("name"), Some(&json!("Pasta")));
        assert_eq!(body.dishes[0].dish.get("price"), Some(&json!(12)));
    }
}
