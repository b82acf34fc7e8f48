table! {
    artists (id) {
        id -> Uuid,
        name -> Text,
        city -> Nullable<Text>,
        state -> Nullable<Text>,
        phone -> Nullable<Text>,
        genres -> Array<Text>,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    shows (id) {
        id -> Uuid,
        artist_id -> Uuid,
        venue_id -> Uuid,
        show_time -> Timestamp,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    venues (id) {
        id -> Uuid,
        name -> Text,
        city -> Nullable<Text>,
        state -> Nullable<Text>,
        address -> Nullable<Text>,
        phone -> Nullable<Text>,
        genres -> Array<Text>,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(shows -> artists (artist_id));
joinable!(shows -> venues (venue_id));

allow_tables_to_appear_in_same_query!(artists, shows, venues);
