//! Notification fan-out for calendar, event, and messaging mutations.
//!
//! Draft construction is pure; dispatch is best-effort. The primary mutation
//! has already been committed when `dispatch` runs, so a failed batch insert
//! must never surface to the client.

use chrono::Utc;
use sea_orm::{ActiveValue::Set, EntityTrait};
use uuid::Uuid;

use crate::entities::notification::{self, NotificationMeta};
use crate::entities::sea_orm_active_enums::{
    NotificationStatus, NotificationType, PriorityEnum,
};
use crate::static_service;

#[derive(Clone, Debug)]
pub enum DomainEvent {
    EventCreated {
        calendar_id: Uuid,
        event_id: Uuid,
        title: String,
        priority: PriorityEnum,
        attendee_ids: Vec<Uuid>,
    },
    EventUpdated {
        calendar_id: Uuid,
        event_id: Uuid,
        title: String,
        attendee_ids: Vec<Uuid>,
    },
    /// Attendee snapshot must be taken before the event row is removed.
    EventCancelled {
        calendar_id: Uuid,
        event_id: Uuid,
        title: String,
        attendee_ids: Vec<Uuid>,
    },
    EventResponse {
        calendar_id: Uuid,
        event_id: Uuid,
        title: String,
        responder_name: String,
        response_status: String,
        creator_id: Uuid,
    },
    MessageSent {
        message_id: Uuid,
        sender_id: Uuid,
        sender_name: String,
        subject: String,
        priority: PriorityEnum,
        recipient_ids: Vec<Uuid>,
    },
    AnnouncementCreated {
        message_id: Uuid,
        sender_id: Uuid,
        subject: String,
        priority: PriorityEnum,
        recipient_ids: Vec<Uuid>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationDraft {
    pub recipient_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: PriorityEnum,
    pub link: Option<String>,
    pub metadata: NotificationMeta,
}

/// One draft per recipient; an empty recipient set produces an empty batch.
pub fn build_notifications(event: &DomainEvent) -> Vec<NotificationDraft> {
    match event {
        DomainEvent::EventCreated {
            calendar_id,
            event_id,
            title,
            priority,
            attendee_ids,
        } => attendee_ids
            .iter()
            .map(|&recipient_id| NotificationDraft {
                recipient_id,
                title: "New Calendar Event".to_string(),
                message: format!("You have been invited to: {title}"),
                notification_type: NotificationType::Event,
                priority: *priority,
                link: Some(format!("/calendar/{calendar_id}/event/{event_id}")),
                metadata: NotificationMeta {
                    calendar_id: Some(*calendar_id),
                    event_id: Some(*event_id),
                    kind: Some("invitation".to_string()),
                    ..Default::default()
                },
            })
            .collect(),
        DomainEvent::EventUpdated {
            calendar_id,
            event_id,
            title,
            attendee_ids,
        } => attendee_ids
            .iter()
            .map(|&recipient_id| NotificationDraft {
                recipient_id,
                title: "Event Updated".to_string(),
                message: format!("The event \"{title}\" has been updated"),
                notification_type: NotificationType::Event,
                priority: PriorityEnum::Normal,
                link: Some(format!("/calendar/{calendar_id}/event/{event_id}")),
                metadata: NotificationMeta {
                    calendar_id: Some(*calendar_id),
                    event_id: Some(*event_id),
                    kind: Some("update".to_string()),
                    ..Default::default()
                },
            })
            .collect(),
        DomainEvent::EventCancelled {
            calendar_id,
            event_id,
            title,
            attendee_ids,
        } => attendee_ids
            .iter()
            .map(|&recipient_id| NotificationDraft {
                recipient_id,
                title: "Event Cancelled".to_string(),
                message: format!("The event \"{title}\" has been cancelled"),
                notification_type: NotificationType::Event,
                priority: PriorityEnum::Normal,
                link: None,
                metadata: NotificationMeta {
                    calendar_id: Some(*calendar_id),
                    event_id: Some(*event_id),
                    kind: Some("cancellation".to_string()),
                    ..Default::default()
                },
            })
            .collect(),
        DomainEvent::EventResponse {
            calendar_id,
            event_id,
            title,
            responder_name,
            response_status,
            creator_id,
        } => vec![NotificationDraft {
            recipient_id: *creator_id,
            title: "Event Response".to_string(),
            message: format!("{responder_name} has {response_status} the event \"{title}\""),
            notification_type: NotificationType::Event,
            priority: PriorityEnum::Normal,
            link: Some(format!("/calendar/{calendar_id}/event/{event_id}")),
            metadata: NotificationMeta {
                calendar_id: Some(*calendar_id),
                event_id: Some(*event_id),
                kind: Some("response".to_string()),
                response_status: Some(response_status.clone()),
                ..Default::default()
            },
        }],
        DomainEvent::MessageSent {
            message_id,
            sender_id,
            sender_name,
            subject,
            priority,
            recipient_ids,
        } => recipient_ids
            .iter()
            .map(|&recipient_id| NotificationDraft {
                recipient_id,
                title: format!("New Message from {sender_name}"),
                message: format!("Subject: {subject}"),
                notification_type: NotificationType::Message,
                priority: *priority,
                link: Some(format!("/messages/{message_id}")),
                metadata: NotificationMeta {
                    message_id: Some(*message_id),
                    sender_id: Some(*sender_id),
                    ..Default::default()
                },
            })
            .collect(),
        DomainEvent::AnnouncementCreated {
            message_id,
            sender_id,
            subject,
            priority,
            recipient_ids,
        } => recipient_ids
            .iter()
            .map(|&recipient_id| NotificationDraft {
                recipient_id,
                title: "New Announcement".to_string(),
                message: subject.clone(),
                notification_type: NotificationType::Message,
                priority: *priority,
                link: Some(format!("/announcements/{message_id}")),
                metadata: NotificationMeta {
                    message_id: Some(*message_id),
                    sender_id: Some(*sender_id),
                    kind: Some("announcement".to_string()),
                    ..Default::default()
                },
            })
            .collect(),
    }
}

/// Persist the batch. Errors are logged and dropped so the caller's already
/// committed mutation still returns success.
pub async fn dispatch(event: DomainEvent) {
    let drafts = build_notifications(&event);
    if drafts.is_empty() {
        return;
    }
    let count = drafts.len();
    let now = Utc::now().naive_utc();
    let models: Vec<notification::ActiveModel> = drafts
        .into_iter()
        .map(|draft| notification::ActiveModel {
            notification_id: Set(Uuid::new_v4()),
            recipient_id: Set(draft.recipient_id),
            title: Set(draft.title),
            message: Set(draft.message),
            notification_type: Set(draft.notification_type),
            priority: Set(draft.priority),
            status: Set(NotificationStatus::Unread),
            link: Set(draft.link),
            metadata: Set(draft.metadata),
            read_at: Set(None),
            archived_at: Set(None),
            expires_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();

    let conn = static_service::get_database_connection().await;
    if let Err(error) = notification::Entity::insert_many(models).exec(conn).await {
        tracing::warn!(%error, count, "notification fan-out failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_created_fans_out_to_every_attendee() {
        let attendees: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let calendar_id = Uuid::new_v4();
        let event_id = Uuid::new_v4();
        let drafts = build_notifications(&DomainEvent::EventCreated {
            calendar_id,
            event_id,
            title: "Science Fair".to_string(),
            priority: PriorityEnum::High,
            attendee_ids: attendees.clone(),
        });
        assert_eq!(drafts.len(), 3);
        for (draft, attendee) in drafts.iter().zip(&attendees) {
            assert_eq!(draft.recipient_id, *attendee);
            assert_eq!(draft.title, "New Calendar Event");
            assert_eq!(draft.message, "You have been invited to: Science Fair");
            assert_eq!(draft.priority, PriorityEnum::High);
            assert_eq!(draft.metadata.calendar_id, Some(calendar_id));
            assert_eq!(draft.metadata.event_id, Some(event_id));
            assert_eq!(draft.metadata.kind.as_deref(), Some("invitation"));
        }
    }

    #[test]
    fn no_attendees_means_no_drafts() {
        let drafts = build_notifications(&DomainEvent::EventUpdated {
            calendar_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            title: "Empty".to_string(),
            attendee_ids: vec![],
        });
        assert!(drafts.is_empty());
    }

    #[test]
    fn cancellation_uses_fixed_priority() {
        let drafts = build_notifications(&DomainEvent::EventCancelled {
            calendar_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            title: "Field Trip".to_string(),
            attendee_ids: vec![Uuid::new_v4()],
        });
        assert_eq!(drafts[0].title, "Event Cancelled");
        assert_eq!(drafts[0].message, "The event \"Field Trip\" has been cancelled");
        assert_eq!(drafts[0].priority, PriorityEnum::Normal);
        assert_eq!(drafts[0].metadata.kind.as_deref(), Some("cancellation"));
    }

    #[test]
    fn response_targets_only_the_event_creator() {
        let creator = Uuid::new_v4();
        let drafts = build_notifications(&DomainEvent::EventResponse {
            calendar_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            title: "PTA Meeting".to_string(),
            responder_name: "Jane Doe".to_string(),
            response_status: "accepted".to_string(),
            creator_id: creator,
        });
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].recipient_id, creator);
        assert_eq!(
            drafts[0].message,
            "Jane Doe has accepted the event \"PTA Meeting\""
        );
        assert_eq!(drafts[0].metadata.response_status.as_deref(), Some("accepted"));
    }

    #[test]
    fn message_draft_carries_sender_back_reference() {
        let sender = Uuid::new_v4();
        let message_id = Uuid::new_v4();
        let drafts = build_notifications(&DomainEvent::MessageSent {
            message_id,
            sender_id: sender,
            sender_name: "John Smith".to_string(),
            subject: "Homework".to_string(),
            priority: PriorityEnum::Normal,
            recipient_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        });
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "New Message from John Smith");
        assert_eq!(drafts[0].message, "Subject: Homework");
        assert_eq!(drafts[0].link.as_deref(), Some(format!("/messages/{message_id}").as_str()));
        assert_eq!(drafts[0].metadata.sender_id, Some(sender));
        assert_eq!(drafts[0].metadata.message_id, Some(message_id));
    }

    #[test]
    fn announcement_title_is_fixed_and_message_is_subject() {
        let drafts = build_notifications(&DomainEvent::AnnouncementCreated {
            message_id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            subject: "School closed Friday".to_string(),
            priority: PriorityEnum::Urgent,
            recipient_ids: vec![Uuid::new_v4()],
        });
        assert_eq!(drafts[0].title, "New Announcement");
        assert_eq!(drafts[0].message, "School closed Friday");
        assert_eq!(drafts[0].priority, PriorityEnum::Urgent);
        assert_eq!(drafts[0].metadata.kind.as_deref(), Some("announcement"));
    }
}
