use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;
use actix_web::{
    web::{Json, Path},
    HttpResponse,
};
use db::prelude::*;
use diesel::PgConnection;

#[derive(Deserialize, Serialize)]
pub struct CreateOrderRequest {
    pub items: Vec<CheckoutItem>,
    pub coupon_code: Option<String>,
}

#[derive(Serialize)]
pub struct DisplayOrder {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl DisplayOrder {
    fn from_order(order: Order, conn: &PgConnection) -> Result<DisplayOrder, DatabaseError> {
        let items = order.items(conn)?;
        Ok(DisplayOrder { order, items })
    }
}

pub async fn create(
    (connection, create_request, auth_user): (Connection, Json<CreateOrderRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::OrderWrite)?;

    let connection = connection.get();
    let order = Order::checkout(
        auth_user.id(),
        &create_request.items,
        create_request.coupon_code.as_deref(),
        connection,
    )?;

    Ok(HttpResponse::Created().json(DisplayOrder::from_order(order, connection)?))
}

pub async fn index((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::OrderRead)?;

    let connection = connection.get();
    let orders = Order::find_for_user(auth_user.id(), connection)?
        .into_iter()
        .map(|order| DisplayOrder::from_order(order, connection))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HttpResponse::Ok().json(json!({ "data": orders })))
}

pub async fn show(
    (connection, path, auth_user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::OrderRead)?;

    let connection = connection.get();
    let order = Order::find(path.id, connection)?;
    if order.user_id != auth_user.id() {
        return application::forbidden("Order belongs to another user");
    }

    Ok(HttpResponse::Ok().json(DisplayOrder::from_order(order, connection)?))
}
