/// Wraps a raw record in its GraphQL entity-response envelope
/// (`{ data: { id, attributes } }`, or `{ data: null }` when absent).
pub trait ToEntityResponse: Sized {
    type Response;

    fn to_entity_response(record: Option<Self>) -> Self::Response;
}

pub fn to_entity_response<R: ToEntityResponse>(record: Option<R>) -> R::Response {
    R::to_entity_response(record)
}
