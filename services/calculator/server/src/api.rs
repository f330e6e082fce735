use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{Route, State};
use serde::Deserialize;

use engine::{Calculator, Snapshot};
use telemetry::Measure;

lazy_static! {
    static ref SUBMIT_MEASURE: Measure = Measure::new("controller", "submit");
    static ref CURRENT_MEASURE: Measure = Measure::new("controller", "current");
}

#[get("/status")]
fn status() -> Value {
    json!({ "status": "ok" })
}

#[get("/metrics")]
fn metrics() -> Result<String, Status> {
    telemetry::encode().map_err(|_| Status::InternalServerError)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculationRequest {
    input_line: String,
}

#[post("/calculation", format = "json", data = "<request>")]
fn submit(
    request: Json<CalculationRequest>,
    calculator: &State<Arc<Calculator>>,
) -> Result<Status, ()> {
    SUBMIT_MEASURE.stats(|| {
        calculator.submit(&request.input_line);
        Ok(Status::NoContent)
    })
}

#[get("/calculation")]
fn current(calculator: &State<Arc<Calculator>>) -> Result<Json<Snapshot>, ()> {
    CURRENT_MEASURE.stats(|| Ok(Json(calculator.current_state())))
}

pub fn routes() -> Vec<Route> {
    routes![status, metrics, submit, current]
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use rocket::http::ContentType;
    use rocket::local::blocking::Client;
    use serde::Deserialize;

    use engine::NOT_A_NUMBER;

    use super::*;

    #[derive(Deserialize)]
    struct StatusResponse {
        status: String,
    }

    fn client() -> Client {
        let rocket = rocket::build()
            .manage(Arc::new(Calculator::default()))
            .mount("/", routes());
        Client::tracked(rocket).expect("valid rocket instance")
    }

    fn post(client: &Client, input_line: &str) -> Status {
        client
            .post("/calculation")
            .header(ContentType::JSON)
            .body(json!({ "inputLine": input_line }).to_string())
            .dispatch()
            .status()
    }

    fn current_state(client: &Client) -> Result<Snapshot, Box<dyn Error>> {
        let response = client.get("/calculation").dispatch();
        assert_eq!(response.status(), Status::Ok);
        Ok(serde_json::from_reader(response)?)
    }

    #[test]
    fn test_status() -> Result<(), Box<dyn Error>> {
        let client = client();
        let response = client.get("/status").dispatch();

        assert_eq!(response.status(), Status::Ok);
        let decoded: StatusResponse = serde_json::from_reader(response)?;
        assert_eq!(decoded.status, "ok");
        Ok(())
    }

    #[test]
    fn test_initial_state() -> Result<(), Box<dyn Error>> {
        let client = client();
        let state = current_state(&client)?;

        assert_eq!(state.answer, "0");
        assert!(state.history.is_empty());
        assert_eq!(state.error, "");
        Ok(())
    }

    #[test]
    fn test_calculation() -> Result<(), Box<dyn Error>> {
        let client = client();

        assert_eq!(post(&client, "1+2*3"), Status::NoContent);
        assert_eq!(post(&client, "(Ans−1)(2)"), Status::NoContent);

        let state = current_state(&client)?;
        assert_eq!(state.answer, "12");
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].input, "1 + 2 × 3");
        assert_eq!(state.history[0].answer, "7");
        assert_eq!(state.history[1].input, "(Ans − 1) × (2)");
        assert_eq!(state.history[1].answer, "12");
        assert_eq!(state.error, "");
        Ok(())
    }

    #[test]
    fn test_calculation_error() -> Result<(), Box<dyn Error>> {
        let client = client();

        assert_eq!(post(&client, "(1+2"), Status::NoContent);

        let state = current_state(&client)?;
        assert_eq!(state.answer, NOT_A_NUMBER);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.error, "Failed to parse: Unmatched '(' at position 0");

        post(&client, "3");
        let state = current_state(&client)?;
        assert_eq!(state.answer, "3");
        assert_eq!(state.error, "");
        Ok(())
    }

    #[test]
    fn test_measured_routes() -> Result<(), Box<dyn Error>> {
        let client = client();
        post(&client, "2");
        post(&client, "Ans×2");
        current_state(&client)?;

        let metrics = client
            .get("/metrics")
            .dispatch()
            .into_string()
            .unwrap_or_default();
        assert!(metrics.contains(r#"app_layer="controller",class_function="submit""#));
        assert!(metrics.contains(r#"app_layer="controller",class_function="current""#));
        assert_eq!(current_state(&client)?.answer, "4");
        Ok(())
    }

    #[test]
    fn test_invalid_request() {
        let client = client();
        let response = client
            .post("/calculation")
            .header(ContentType::JSON)
            .body(r#"{"expr": "1+1"}"#)
            .dispatch();

        assert_eq!(response.status(), Status::UnprocessableEntity);
    }

    #[test]
    fn test_metrics() {
        let client = client();
        post(&client, "1");

        let response = client.get("/metrics").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap_or_default();
        assert!(body.contains("success_counter"));
    }
}
