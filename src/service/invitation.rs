use log::info;

use crate::{
    db,
    dto::NewInvitationDto,
    errors::AppError,
    models::{InvitationStatus, RsvpResponse},
    Store,
};

pub async fn send(dto: &NewInvitationDto, store: &mut Store) -> Result<i64, AppError> {
    if dto.sender_id == dto.receiver_id {
        return Err(AppError::BadClientData);
    }
    let id = db::invitations::create(dto, store).await?;
    info!("invitation #{} sent to user #{}", id, dto.receiver_id);
    Ok(id)
}

/// Accepts or declines a pending invitation and records the receiver's RSVP.
pub async fn respond(invitation_id: i64, accept: bool, store: &mut Store) -> Result<i64, AppError> {
    let invitation = db::invitations::get_by_id(invitation_id, store).await?;
    if invitation.status != InvitationStatus::Pending {
        return Err(AppError::BadClientData);
    }
    let (Some(receiver_id), Some(event_id)) = (invitation.receiver_id, invitation.event_id) else {
        return Err(AppError::BadClientData);
    };
    let (status, response) = if accept {
        (InvitationStatus::Accepted, RsvpResponse::Attending)
    } else {
        (InvitationStatus::Declined, RsvpResponse::NotAttending)
    };
    db::invitations::set_status(invitation_id, status, store).await?;
    let rsvp_id = db::rsvp::create(receiver_id, event_id, Some(invitation_id), response, store).await?;
    if accept {
        db::event::add_guest(event_id, receiver_id, store).await?;
    }
    Ok(rsvp_id)
}
