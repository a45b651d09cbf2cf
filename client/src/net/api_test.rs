use super::*;

#[test]
fn customers_endpoint_is_versioned_collection() {
    assert_eq!(CUSTOMERS_ENDPOINT, "/api/v1/customers");
}

#[test]
fn interpret_create_response_passes_envelope_through() {
    let envelope = CreateCustomerResponse { err: None, body: Some(Customer::default()) };
    assert_eq!(interpret_create_response(200, Ok(envelope.clone())), Ok(envelope));
}

#[test]
fn interpret_create_response_keeps_error_envelope_on_bad_status() {
    let envelope = CreateCustomerResponse { err: Some("expected value".to_owned()), body: None };
    assert_eq!(interpret_create_response(400, Ok(envelope.clone())), Ok(envelope));
}

#[test]
fn interpret_create_response_maps_undecodable_error_status() {
    assert_eq!(interpret_create_response(503, Err("eof".to_owned())), Err(ApiError::Status(503)));
}

#[test]
fn interpret_create_response_maps_undecodable_success_body() {
    assert_eq!(
        interpret_create_response(200, Err("invalid type".to_owned())),
        Err(ApiError::Decode("invalid type".to_owned()))
    );
}

#[test]
fn http_repository_is_unavailable_outside_browser() {
    #[cfg(not(feature = "hydrate"))]
    {
        let repo = HttpCustomerRepository;
        assert_eq!(futures::executor::block_on(repo.list()), Err(ApiError::Unavailable));
        let payload = CreateCustomerRequest::default();
        assert_eq!(futures::executor::block_on(repo.create(&payload)), Err(ApiError::Unavailable));
    }
}
