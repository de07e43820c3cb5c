// Diesel table definitions for the catalogue schema.

diesel::table! {
    properties (id) {
        id -> Integer,
        title -> Text,
        description -> Nullable<Text>,
        #[sql_name = "type"]
        kind -> Text,
        price -> Nullable<Double>,
        price_per_night -> Nullable<Double>,
        location -> Text,
        neighborhood -> Nullable<Text>,
        address -> Nullable<Text>,
        bedrooms -> Integer,
        bathrooms -> Integer,
        sqft -> Double,
        image_url -> Nullable<Text>,
        images -> Text,
        features -> Text,
        agent_name -> Nullable<Text>,
        agent_contact -> Nullable<Text>,
        is_luxury -> Bool,
        is_oceanfront -> Bool,
        is_featured -> Bool,
        status -> Text,
        created_at -> Text,
        updated_at -> Text,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        video_url -> Nullable<Text>,
        virtual_tour_url -> Nullable<Text>,
        amenities -> Text,
        nearby_attractions -> Text,
        availability_calendar -> Text,
        min_stay -> Nullable<Integer>,
        max_guests -> Nullable<Integer>,
        check_in_time -> Nullable<Text>,
        check_out_time -> Nullable<Text>,
        house_rules -> Nullable<Text>,
        cancellation_policy -> Nullable<Text>,
    }
}

diesel::table! {
    bookings (id) {
        id -> Integer,
        property_id -> Integer,
        guest_name -> Text,
        guest_email -> Text,
        guest_phone -> Nullable<Text>,
        check_in_date -> Text,
        check_out_date -> Text,
        guests_count -> Integer,
        total_price -> Double,
        status -> Text,
        special_requests -> Nullable<Text>,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    inquiries (id) {
        id -> Integer,
        property_id -> Integer,
        client_name -> Text,
        client_email -> Text,
        client_phone -> Nullable<Text>,
        message -> Nullable<Text>,
        inquiry_type -> Text,
        tour_date -> Nullable<Text>,
        tour_time -> Nullable<Text>,
        status -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::joinable!(bookings -> properties (property_id));
diesel::joinable!(inquiries -> properties (property_id));

diesel::allow_tables_to_appear_in_same_query!(bookings, inquiries, properties);
