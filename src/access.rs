//! Authorization predicates over the authenticated actor and loaded records.

use uuid::Uuid;

use crate::entities::calendar::{self, Attendee, CalendarEvent};
use crate::entities::message;
use crate::entities::parent;
use crate::entities::sea_orm_active_enums::{CalendarVisibility, RoleEnum};

/// The authenticated principal, resolved from the JWT by the extractor.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: Uuid,
    pub role: RoleEnum,
    pub name: String,
    pub grade: Option<String>,
    pub section: Option<String>,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == RoleEnum::Admin
    }

    pub fn is_teacher(&self) -> bool {
        self.role == RoleEnum::Teacher
    }
}

/// Which side of a message an actor deletes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteDisposition {
    Sender,
    Recipient,
}

/// Public calendars are visible to everyone. Restricted calendars open up
/// when ANY of role, grade, or section matches the allow lists. Private
/// calendars are creator/admin only.
pub fn can_view_calendar(actor: &Actor, calendar: &calendar::Model) -> bool {
    if actor.is_admin() || calendar.created_by == actor.id {
        return true;
    }
    match calendar.visibility {
        CalendarVisibility::Public => true,
        CalendarVisibility::Private => false,
        CalendarVisibility::Restricted => {
            calendar.allowed_roles.contains(actor.role)
                || actor
                    .grade
                    .as_deref()
                    .is_some_and(|g| calendar.allowed_grades.contains(g))
                || actor
                    .section
                    .as_deref()
                    .is_some_and(|s| calendar.allowed_sections.contains(s))
        }
    }
}

pub fn can_modify_calendar(actor: &Actor, calendar: &calendar::Model) -> bool {
    actor.is_admin() || calendar.created_by == actor.id
}

pub fn can_modify_event(actor: &Actor, calendar: &calendar::Model, event: &CalendarEvent) -> bool {
    actor.is_admin() || calendar.created_by == actor.id || event.created_by == actor.id
}

/// A recipient who soft-deleted their copy loses read access; the sender
/// keeps it regardless.
pub fn can_read_message(actor: &Actor, msg: &message::Model) -> bool {
    if msg.sender_id == actor.id {
        return true;
    }
    msg.recipients
        .find(actor.id)
        .is_some_and(|r| r.deleted_at.is_none())
}

pub fn delete_disposition(actor: &Actor, msg: &message::Model) -> Option<DeleteDisposition> {
    if msg.sender_id == actor.id {
        Some(DeleteDisposition::Sender)
    } else if msg.recipients.find(actor.id).is_some() {
        Some(DeleteDisposition::Recipient)
    } else {
        None
    }
}

pub fn parent_owns_child(parent: &parent::Model, student_user_id: Uuid) -> bool {
    parent.children.contains(student_user_id)
}

/// Event responses only update an existing attendee entry, never insert one.
pub fn find_attendee(event: &CalendarEvent, user_id: Uuid) -> Option<&Attendee> {
    event.attendees.iter().find(|a| a.user_id == user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::calendar::{AttendeeStatus, CalendarEvents, EventStatus, RoleList};
    use crate::entities::message::{MessageRecipient, RecipientList};
    use crate::entities::sea_orm_active_enums::{
        CalendarType, MessageCategory, MessageStatus, MessageType, PriorityEnum,
    };
    use crate::entities::shared::{IdList, StringList};
    use chrono::NaiveDateTime;

    fn actor(role: RoleEnum) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
            name: "Test User".to_string(),
            grade: Some("10".to_string()),
            section: Some("A".to_string()),
        }
    }

    fn now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }

    fn cal(visibility: CalendarVisibility, created_by: Uuid) -> calendar::Model {
        calendar::Model {
            calendar_id: Uuid::new_v4(),
            name: "Fall 2025".to_string(),
            description: None,
            calendar_type: CalendarType::Academic,
            academic_year: "2025-2026".to_string(),
            term: "fall".to_string(),
            start_date: now(),
            end_date: now(),
            color: "#1976d2".to_string(),
            visibility,
            allowed_roles: RoleList::default(),
            allowed_grades: StringList::default(),
            allowed_sections: StringList::default(),
            events: CalendarEvents::default(),
            created_by,
            last_modified_by: None,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn msg(sender_id: Uuid, recipients: Vec<MessageRecipient>) -> message::Model {
        message::Model {
            message_id: Uuid::new_v4(),
            sender_id,
            recipients: RecipientList(recipients),
            subject: "hello".to_string(),
            content: "body".to_string(),
            message_type: MessageType::Direct,
            priority: PriorityEnum::Normal,
            category: MessageCategory::General,
            status: MessageStatus::Sent,
            scheduled_for: None,
            expires_at: None,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn public_calendar_visible_to_any_role() {
        let c = cal(CalendarVisibility::Public, Uuid::new_v4());
        assert!(can_view_calendar(&actor(RoleEnum::Student), &c));
        assert!(can_view_calendar(&actor(RoleEnum::Parent), &c));
    }

    #[test]
    fn private_calendar_limited_to_creator_and_admin() {
        let creator = actor(RoleEnum::Teacher);
        let c = cal(CalendarVisibility::Private, creator.id);
        assert!(can_view_calendar(&creator, &c));
        assert!(can_view_calendar(&actor(RoleEnum::Admin), &c));
        assert!(!can_view_calendar(&actor(RoleEnum::Student), &c));
    }

    #[test]
    fn restricted_calendar_matches_any_single_criterion() {
        let mut c = cal(CalendarVisibility::Restricted, Uuid::new_v4());
        c.allowed_grades = StringList(vec!["10".to_string()]);

        // grade matches even though role and section do not
        let a = actor(RoleEnum::Student);
        assert!(can_view_calendar(&a, &c));

        let mut other = actor(RoleEnum::Student);
        other.grade = Some("11".to_string());
        other.section = Some("B".to_string());
        assert!(!can_view_calendar(&other, &c));

        c.allowed_roles = RoleList(vec![RoleEnum::Student]);
        assert!(can_view_calendar(&other, &c));
    }

    #[test]
    fn event_modification_allows_event_creator() {
        let event_creator = actor(RoleEnum::Teacher);
        let c = cal(CalendarVisibility::Public, Uuid::new_v4());
        let event = CalendarEvent {
            event_id: Uuid::new_v4(),
            title: "Exam".to_string(),
            description: None,
            start_date: now(),
            end_date: now(),
            all_day: false,
            location: None,
            category: None,
            priority: PriorityEnum::Normal,
            status: EventStatus::Scheduled,
            attendees: vec![],
            created_by: event_creator.id,
            last_modified_by: None,
        };
        assert!(can_modify_event(&event_creator, &c, &event));
        assert!(!can_modify_event(&actor(RoleEnum::Teacher), &c, &event));
    }

    #[test]
    fn deleted_recipient_copy_blocks_reading() {
        let reader = actor(RoleEnum::Parent);
        let m = msg(
            Uuid::new_v4(),
            vec![MessageRecipient {
                user_id: reader.id,
                read_at: None,
                deleted_at: Some(now()),
            }],
        );
        assert!(!can_read_message(&reader, &m));
    }

    #[test]
    fn sender_reads_even_after_recipients_delete() {
        let sender = actor(RoleEnum::Teacher);
        let m = msg(sender.id, vec![]);
        assert!(can_read_message(&sender, &m));
    }

    #[test]
    fn delete_disposition_prefers_sender_side() {
        let sender = actor(RoleEnum::Teacher);
        let recipient = actor(RoleEnum::Student);
        let m = msg(
            sender.id,
            vec![MessageRecipient {
                user_id: recipient.id,
                read_at: None,
                deleted_at: None,
            }],
        );
        assert_eq!(
            delete_disposition(&sender, &m),
            Some(DeleteDisposition::Sender)
        );
        assert_eq!(
            delete_disposition(&recipient, &m),
            Some(DeleteDisposition::Recipient)
        );
        assert_eq!(delete_disposition(&actor(RoleEnum::Parent), &m), None);
    }

    #[test]
    fn attendee_lookup_never_invents_entries() {
        let user = Uuid::new_v4();
        let event = CalendarEvent {
            event_id: Uuid::new_v4(),
            title: "Meeting".to_string(),
            description: None,
            start_date: now(),
            end_date: now(),
            all_day: false,
            location: None,
            category: None,
            priority: PriorityEnum::Normal,
            status: EventStatus::Scheduled,
            attendees: vec![Attendee {
                user_id: user,
                status: AttendeeStatus::Pending,
                response_date: None,
            }],
            created_by: Uuid::new_v4(),
            last_modified_by: None,
        };
        assert!(find_attendee(&event, user).is_some());
        assert!(find_attendee(&event, Uuid::new_v4()).is_none());
    }

    #[test]
    fn parent_child_link_check() {
        let child = Uuid::new_v4();
        let p = parent::Model {
            parent_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            children: IdList(vec![child]),
            relationship: "mother".to_string(),
            occupation: None,
            work_phone: None,
            emergency_contact: None,
            address: None,
            notification_preferences: Default::default(),
            preferred_language: "en".to_string(),
            created_at: now(),
            updated_at: now(),
        };
        assert!(parent_owns_child(&p, child));
        assert!(!parent_owns_child(&p, Uuid::new_v4()));
    }
}
