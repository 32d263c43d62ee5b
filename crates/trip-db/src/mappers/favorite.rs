//! Favorite entity <-> model mapper

use trip_core::entities::Favorite;
use trip_core::value_objects::RecordId;

use crate::models::FavoriteModel;

/// Convert FavoriteModel to Favorite entity
impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            favorite_user_id: RecordId::new(model.favorite_user_id),
            favorite_phone_number: model.favorite_phone_number,
            date_added: model.date_added,
        }
    }
}
