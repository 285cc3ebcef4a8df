use async_trait::async_trait;
use log::info;
use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};

use crate::access_token::AccessTokenDecoder;
use crate::graphql::Caller;

#[async_trait]
impl<'r> FromRequest<'r> for Caller {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let header = match request.headers().get_one("Authorization") {
            // no token is not an error, the request runs anonymously
            None => return Outcome::Success(Caller::Anonymous),
            Some(header) => header,
        };
        let decoder = try_outcome!(request.guard::<&State<AccessTokenDecoder>>().await);
        // the original service also accepted the raw token without
        // the Bearer scheme prefix
        let token = header.strip_prefix("Bearer ").unwrap_or(header);
        match decoder.decode_token(token) {
            Ok(data) => Outcome::Success(Caller::User(data.user_id)),
            Err(e) => {
                // an unverifiable token fails the whole request,
                // never downgraded to anonymous
                info!("rejecting request with invalid session token: {e}");
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}
