use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use josekit::jwk::Jwk;
use notabene::access_token::{AccessTokenDecoder, AccessTokenGenerator};
use notabene::graphql::{build_schema, ApiSchema, Caller};
use notabene::hasher::{Hasher, ProductionHasher};
use notabene::store::Stores;
use serde_json::json;

pub struct TestBackend {
    pub schema: ApiSchema,
    pub decoder: AccessTokenDecoder,
    pub stores: Stores,
}

pub fn make_backend() -> TestBackend {
    let key = Jwk::generate_oct_key(64)
        .expect("key generation failed");
    let generator = AccessTokenGenerator::from_jwk(&key)
        .expect("generator creation failed");
    let decoder = AccessTokenDecoder::from_jwk(&key)
        .expect("decoder creation failed");
    // small argon2 parameters so the tests don't burn cpu
    let hasher: Arc<dyn Hasher> = Arc::new(
        ProductionHasher::new(
            argon2::Params::new(64, 1, 1, Some(32))
                .expect("invalid test params"),
        )
    );
    let stores = Stores::in_memory();
    TestBackend {
        schema: build_schema(stores.clone(), hasher, Arc::new(generator)),
        decoder,
        stores,
    }
}

impl TestBackend {
    pub async fn execute(&self, caller: Caller, query: &str) -> Response {
        self.schema
            .execute(Request::new(query).data(caller))
            .await
    }

    pub async fn execute_with_vars(
        &self,
        caller: Caller,
        query: &str,
        variables: serde_json::Value,
    ) -> Response {
        self.schema
            .execute(
                Request::new(query)
                    .variables(Variables::from_json(variables))
                    .data(caller),
            )
            .await
    }

    /// Execute and unwrap the data, failing the test on any error.
    pub async fn execute_ok(&self, caller: Caller, query: &str) -> serde_json::Value {
        let response = self.execute(caller, query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors,
        );
        response.data.into_json()
            .expect("response data is not json")
    }

    pub async fn sign_up(&self, username: &str, password: &str, email: &str) -> String {
        let response = self.execute_with_vars(
            Caller::Anonymous,
            "mutation($username: String!, $password: String!, $email: String!) {
                signUp(username: $username, password: $password, email: $email)
            }",
            json!({ "username": username, "password": password, "email": email }),
        ).await;
        assert!(
            response.errors.is_empty(),
            "sign-up failed: {:?}",
            response.errors,
        );
        response.data.into_json()
            .expect("response data is not json")["signUp"]
            .as_str()
            .expect("signUp did not return a token")
            .to_owned()
    }

    pub fn caller_for(&self, token: &str) -> Caller {
        Caller::User(
            self.decoder.decode_token(token)
                .expect("invalid token")
                .user_id,
        )
    }
}

pub fn error_code(response: &Response) -> Option<String> {
    let error = response.errors.first()?;
    let error = serde_json::to_value(error)
        .expect("error serialization failed");
    error["extensions"]["code"].as_str().map(str::to_owned)
}

pub fn error_message(response: &Response) -> Option<String> {
    response.errors.first().map(|e| e.message.clone())
}
