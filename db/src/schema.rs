table! {
    coupons (id) {
        id -> Int8,
        code -> Text,
        discount_in_cents -> Nullable<Int8>,
        discount_as_percentage -> Nullable<Int8>,
        max_uses -> Int8,
        start_date -> Timestamp,
        end_date -> Timestamp,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    events (id) {
        id -> Int8,
        user_id -> Uuid,
        name -> Text,
        description -> Nullable<Text>,
        location -> Nullable<Text>,
        event_start -> Timestamp,
        timezone -> Text,
        min_age -> Nullable<Int4>,
        promo_image_url -> Nullable<Text>,
        status -> Text,
        cancelled_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    favorites (id) {
        id -> Int8,
        event_id -> Int8,
        user_id -> Uuid,
        created_at -> Timestamp,
    }
}

table! {
    notifications (id) {
        id -> Int8,
        user_id -> Uuid,
        event_id -> Nullable<Int8>,
        kind -> Text,
        message -> Text,
        read_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
    }
}

table! {
    order_items (id) {
        id -> Int8,
        order_id -> Int8,
        ticket_type_id -> Int8,
        quantity -> Int4,
        unit_price_in_cents -> Int8,
        created_at -> Timestamp,
    }
}

table! {
    orders (id) {
        id -> Int8,
        user_id -> Uuid,
        status -> Text,
        coupon_id -> Nullable<Int8>,
        subtotal_in_cents -> Int8,
        discount_in_cents -> Int8,
        total_in_cents -> Int8,
        paid_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    ticket_types (id) {
        id -> Int8,
        event_id -> Int8,
        name -> Text,
        description -> Nullable<Text>,
        price_in_cents -> Int8,
        quantity -> Int4,
        max_per_order -> Int4,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    tickets (id) {
        id -> Int8,
        order_id -> Int8,
        ticket_type_id -> Int8,
        user_id -> Uuid,
        created_at -> Timestamp,
    }
}

table! {
    users (id) {
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        cpf -> Nullable<Text>,
        phone -> Nullable<Text>,
        hashed_pw -> Text,
        role -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(events -> users (user_id));
joinable!(favorites -> events (event_id));
joinable!(favorites -> users (user_id));
joinable!(notifications -> users (user_id));
joinable!(order_items -> orders (order_id));
joinable!(order_items -> ticket_types (ticket_type_id));
joinable!(orders -> coupons (coupon_id));
joinable!(orders -> users (user_id));
joinable!(ticket_types -> events (event_id));
joinable!(tickets -> orders (order_id));
joinable!(tickets -> ticket_types (ticket_type_id));
joinable!(tickets -> users (user_id));

allow_tables_to_appear_in_same_query!(
    coupons,
    events,
    favorites,
    notifications,
    order_items,
    orders,
    ticket_types,
    tickets,
    users,
);
