use crate::server::{
    data::parking_spot::ParkingSpotRepository,
    model::{
        pagination::{PageRequest, Sort, SortDirection, SortField},
        parking_spot::{ParkingSpot, ParkingSpotParam},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod find_by_id;

fn param(number: &str, plate: &str, apartment: &str, block: &str) -> ParkingSpotParam {
    ParkingSpotParam {
        parking_spot_number: number.to_string(),
        license_plate_car: plate.to_string(),
        brand_car: "Fiat".to_string(),
        model_car: "Uno".to_string(),
        color_car: "Red".to_string(),
        responsible_name: "Maria".to_string(),
        apartment: apartment.to_string(),
        block: block.to_string(),
    }
}
