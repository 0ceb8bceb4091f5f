//! Keyword, platform and crawl actions behind the dashboard buttons.
//!
//! Each action validates what the user entered, asks for confirmation where
//! it destroys data, and then submits a server-rendered form. Submission
//! navigates away, so nothing here tracks state between calls.

use crate::config::FormIds;
use crate::registry::FormRegistry;
use crate::services::{Confirmer, DashboardPage, FormHandle, Notifier};
use nm_data::{EntityId, EntityKind};
use thiserror::Error;

pub const CONFIRM_DELETE_KEYWORD: &str = "确定要删除这个关键词吗？";
pub const CONFIRM_DELETE_PLATFORM: &str = "确定要删除这个平台吗？";

/// Input the user still has to provide. The message is shown as the alert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("请输入关键词")]
    MissingKeyword,

    #[error("请输入平台名称")]
    MissingPlatformName,

    #[error("请选择关键词")]
    NoKeywordSelected,

    #[error("请至少选择一个平台")]
    NoPlatformSelected,
}

/// The page did not look the way the action expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("form #{0} is not on this page")]
    MissingForm(String),

    #[error("no delete form registered for {kind} {id}")]
    UnknownEntity { kind: EntityKind, id: EntityId },

    #[error("submitting form #{form} failed: {reason}")]
    SubmitFailed { form: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A form was submitted; the browser is navigating.
    Submitted,
    /// Validation failed and the user was alerted.
    Rejected(ValidationError),
    /// The user declined the confirmation.
    Cancelled,
}

/// The dashboard's button handlers, bound to one page.
pub struct DashboardActions<P: DashboardPage, D> {
    page: P,
    dialogs: D,
    ids: FormIds,
    delete_forms: FormRegistry<P::Form>,
}

impl<P, D> DashboardActions<P, D>
where
    P: DashboardPage,
    D: Notifier + Confirmer,
{
    pub fn new(page: P, dialogs: D, ids: FormIds, delete_forms: FormRegistry<P::Form>) -> Self {
        Self {
            page,
            dialogs,
            ids,
            delete_forms,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Submit the add-keyword form if a keyword was typed.
    pub fn add_keyword(&self) -> Result<ActionOutcome, ActionError> {
        if !self.has_text(&self.ids.new_keyword) {
            return Ok(self.reject(ValidationError::MissingKeyword));
        }
        log::debug!(
            "adding keyword in category {:?}",
            self.page.field_value(&self.ids.keyword_category)
        );
        self.submit(&self.ids.add_keyword_form)
    }

    pub fn delete_keyword(&self, id: &EntityId) -> Result<ActionOutcome, ActionError> {
        self.delete(EntityKind::Keyword, id, CONFIRM_DELETE_KEYWORD)
    }

    /// Submit the add-platform form if a platform name was typed.
    pub fn add_platform(&self) -> Result<ActionOutcome, ActionError> {
        if !self.has_text(&self.ids.platform_name) {
            return Ok(self.reject(ValidationError::MissingPlatformName));
        }
        log::debug!(
            "adding platform of type {:?}",
            self.page.field_value(&self.ids.platform_type)
        );
        self.submit(&self.ids.add_platform_form)
    }

    pub fn delete_platform(&self, id: &EntityId) -> Result<ActionOutcome, ActionError> {
        self.delete(EntityKind::Platform, id, CONFIRM_DELETE_PLATFORM)
    }

    /// Start a crawl for the selected keyword on the checked platforms.
    ///
    /// The keyword is checked first; at most one alert is shown. On success
    /// the loading indicator is revealed and stays until the page navigates.
    pub fn start_crawling(&self) -> Result<ActionOutcome, ActionError> {
        if !self.has_text(&self.ids.keyword_select) {
            return Ok(self.reject(ValidationError::NoKeywordSelected));
        }
        let checked = self.page.checked_count(&self.ids.platform_checkbox_name);
        if checked == 0 {
            return Ok(self.reject(ValidationError::NoPlatformSelected));
        }

        let form = self.lookup_form(&self.ids.crawl_form)?;
        if !self.page.reveal(&self.ids.loading_indicator) {
            log::debug!("no #{} on this page", self.ids.loading_indicator);
        }
        log::info!("starting crawl on {checked} platform(s)");
        self.submit_handle(&self.ids.crawl_form, &form)
    }

    fn delete(
        &self,
        kind: EntityKind,
        id: &EntityId,
        prompt: &str,
    ) -> Result<ActionOutcome, ActionError> {
        if !self.dialogs.confirm(prompt) {
            return Ok(ActionOutcome::Cancelled);
        }
        let form = self
            .delete_forms
            .get(kind, id)
            .ok_or_else(|| ActionError::UnknownEntity {
                kind,
                id: id.clone(),
            })?;
        log::info!("deleting {kind} {id}");
        form.submit().map_err(|reason| ActionError::SubmitFailed {
            form: format!("{}{}", kind.delete_form_prefix(), id),
            reason,
        })?;
        Ok(ActionOutcome::Submitted)
    }

    fn has_text(&self, field_id: &str) -> bool {
        self.page
            .field_value(field_id)
            .is_some_and(|value| !value.trim().is_empty())
    }

    fn reject(&self, error: ValidationError) -> ActionOutcome {
        self.dialogs.notify(&error.to_string());
        ActionOutcome::Rejected(error)
    }

    fn lookup_form(&self, form_id: &str) -> Result<P::Form, ActionError> {
        self.page
            .form(form_id)
            .ok_or_else(|| ActionError::MissingForm(form_id.to_string()))
    }

    fn submit(&self, form_id: &str) -> Result<ActionOutcome, ActionError> {
        let form = self.lookup_form(form_id)?;
        self.submit_handle(form_id, &form)
    }

    fn submit_handle(&self, form_id: &str, form: &P::Form) -> Result<ActionOutcome, ActionError> {
        form.submit().map_err(|reason| ActionError::SubmitFailed {
            form: form_id.to_string(),
            reason,
        })?;
        Ok(ActionOutcome::Submitted)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    #[derive(Clone)]
    pub(crate) struct FakeForm {
        id: String,
        submitted: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl FormHandle for FakeForm {
        fn submit(&self) -> Result<(), String> {
            if self.fail {
                return Err("TypeError: form.submit is not a function".to_string());
            }
            self.submitted.borrow_mut().push(self.id.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct FakePage {
        pub fields: HashMap<String, String>,
        pub checked: usize,
        pub forms: HashSet<String>,
        pub broken_forms: HashSet<String>,
        pub elements: HashSet<String>,
        pub revealed: RefCell<Vec<String>>,
        pub submitted: Rc<RefCell<Vec<String>>>,
    }

    impl FakePage {
        pub fn with_forms(ids: &[&str]) -> Self {
            Self {
                forms: ids.iter().map(|id| id.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn set(&mut self, id: &str, value: &str) {
            self.fields.insert(id.to_string(), value.to_string());
        }

        pub fn form_handle(&self, id: &str) -> FakeForm {
            FakeForm {
                id: id.to_string(),
                submitted: Rc::clone(&self.submitted),
                fail: self.broken_forms.contains(id),
            }
        }
    }

    impl DashboardPage for FakePage {
        type Form = FakeForm;

        fn field_value(&self, id: &str) -> Option<String> {
            self.fields.get(id).cloned()
        }

        fn checked_count(&self, _name: &str) -> usize {
            self.checked
        }

        fn form(&self, id: &str) -> Option<FakeForm> {
            (self.forms.contains(id) || self.broken_forms.contains(id)).then(|| self.form_handle(id))
        }

        fn reveal(&self, id: &str) -> bool {
            self.revealed.borrow_mut().push(id.to_string());
            self.elements.contains(id)
        }

        fn has_element(&self, id: &str) -> bool {
            self.elements.contains(id)
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeDialogs {
        pub answer: Cell<bool>,
        pub alerts: RefCell<Vec<String>>,
        pub questions: RefCell<Vec<String>>,
    }

    impl FakeDialogs {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer: Cell::new(answer),
                ..Self::default()
            }
        }
    }

    impl Notifier for FakeDialogs {
        fn notify(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    impl Confirmer for FakeDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.questions.borrow_mut().push(message.to_string());
            self.answer.get()
        }
    }

    fn actions(page: FakePage, dialogs: FakeDialogs) -> DashboardActions<FakePage, FakeDialogs> {
        let mut registry = FormRegistry::new();
        for element_id in ["deleteKeywordForm_42", "deleteKeywordForm_7", "deletePlatformForm_platform_2"] {
            let form = page.form_handle(element_id);
            for kind in EntityKind::ALL {
                registry.insert_element(kind, element_id, form.clone());
            }
        }
        DashboardActions::new(page, dialogs, FormIds::default(), registry)
    }

    fn submitted(actions: &DashboardActions<FakePage, FakeDialogs>) -> Vec<String> {
        actions.page().submitted.borrow().clone()
    }

    #[test]
    fn test_add_keyword_whitespace_alerts_once_and_does_not_submit() {
        let mut page = FakePage::with_forms(&["addKeywordForm"]);
        page.set("newKeyword", "   \t ");
        let actions = actions(page, FakeDialogs::default());

        let outcome = actions.add_keyword().unwrap();
        assert_eq!(outcome, ActionOutcome::Rejected(ValidationError::MissingKeyword));
        assert_eq!(*actions.dialogs.alerts.borrow(), vec!["请输入关键词"]);
        assert!(submitted(&actions).is_empty());
    }

    #[test]
    fn test_add_keyword_missing_input_counts_as_empty() {
        let actions = actions(FakePage::with_forms(&["addKeywordForm"]), FakeDialogs::default());
        assert_eq!(
            actions.add_keyword().unwrap(),
            ActionOutcome::Rejected(ValidationError::MissingKeyword)
        );
        assert_eq!(actions.dialogs.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_add_keyword_submits_without_alert() {
        let mut page = FakePage::with_forms(&["addKeywordForm"]);
        page.set("newKeyword", "新能源");
        page.set("keywordCategory", "科技");
        let actions = actions(page, FakeDialogs::default());

        assert_eq!(actions.add_keyword().unwrap(), ActionOutcome::Submitted);
        assert!(actions.dialogs.alerts.borrow().is_empty());
        assert_eq!(submitted(&actions), vec!["addKeywordForm"]);
    }

    #[test]
    fn test_add_keyword_without_form_is_an_error() {
        let mut page = FakePage::default();
        page.set("newKeyword", "芯片");
        let actions = actions(page, FakeDialogs::default());
        assert_eq!(
            actions.add_keyword(),
            Err(ActionError::MissingForm("addKeywordForm".to_string()))
        );
    }

    #[test]
    fn test_delete_keyword_confirmed_submits_that_row() {
        let actions = actions(FakePage::default(), FakeDialogs::answering(true));
        let outcome = actions.delete_keyword(&EntityId::from(42u64)).unwrap();
        assert_eq!(outcome, ActionOutcome::Submitted);
        assert_eq!(submitted(&actions), vec!["deleteKeywordForm_42"]);
        assert_eq!(*actions.dialogs.questions.borrow(), vec![CONFIRM_DELETE_KEYWORD]);
    }

    #[test]
    fn test_delete_keyword_declined_submits_nothing() {
        let actions = actions(FakePage::default(), FakeDialogs::answering(false));
        let outcome = actions.delete_keyword(&EntityId::from(42u64)).unwrap();
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(submitted(&actions).is_empty());
        assert!(actions.dialogs.alerts.borrow().is_empty());
    }

    #[test]
    fn test_delete_unknown_row() {
        let actions = actions(FakePage::default(), FakeDialogs::answering(true));
        let err = actions.delete_keyword(&EntityId::from(99u64)).unwrap_err();
        assert_eq!(
            err,
            ActionError::UnknownEntity {
                kind: EntityKind::Keyword,
                id: EntityId::from(99u64),
            }
        );
        assert!(submitted(&actions).is_empty());
    }

    #[test]
    fn test_delete_keyword_does_not_reach_platform_forms() {
        let actions = actions(FakePage::default(), FakeDialogs::answering(true));
        assert!(actions.delete_keyword(&EntityId::from("platform_2")).is_err());
    }

    #[test]
    fn test_delete_platform_confirmed() {
        let actions = actions(FakePage::default(), FakeDialogs::answering(true));
        let outcome = actions.delete_platform(&EntityId::from("platform_2")).unwrap();
        assert_eq!(outcome, ActionOutcome::Submitted);
        assert_eq!(submitted(&actions), vec!["deletePlatformForm_platform_2"]);
        assert_eq!(*actions.dialogs.questions.borrow(), vec![CONFIRM_DELETE_PLATFORM]);
    }

    #[test]
    fn test_add_platform_requires_name() {
        let mut page = FakePage::with_forms(&["addPlatformForm"]);
        page.set("platformName", "");
        page.set("platformType", "weibo");
        let actions = actions(page, FakeDialogs::default());
        assert_eq!(
            actions.add_platform().unwrap(),
            ActionOutcome::Rejected(ValidationError::MissingPlatformName)
        );
        assert_eq!(*actions.dialogs.alerts.borrow(), vec!["请输入平台名称"]);
        assert!(submitted(&actions).is_empty());
    }

    #[test]
    fn test_add_platform_submits() {
        let mut page = FakePage::with_forms(&["addPlatformForm"]);
        page.set("platformName", "微博");
        let actions = actions(page, FakeDialogs::default());
        assert_eq!(actions.add_platform().unwrap(), ActionOutcome::Submitted);
        assert_eq!(submitted(&actions), vec!["addPlatformForm"]);
    }

    #[test]
    fn test_start_crawling_without_platforms_never_reveals_or_submits() {
        for keyword in ["", "人工智能"] {
            let mut page = FakePage::with_forms(&["crawlForm"]);
            page.set("keywordSelect", keyword);
            page.elements.insert("loadingIndicator".to_string());
            let actions = actions(page, FakeDialogs::default());

            let outcome = actions.start_crawling().unwrap();
            assert!(matches!(outcome, ActionOutcome::Rejected(_)));
            assert_eq!(actions.dialogs.alerts.borrow().len(), 1);
            assert!(actions.page().revealed.borrow().is_empty());
            assert!(submitted(&actions).is_empty());
        }
    }

    #[test]
    fn test_start_crawling_checks_keyword_first() {
        let mut page = FakePage::with_forms(&["crawlForm"]);
        page.checked = 2;
        let actions = actions(page, FakeDialogs::default());
        assert_eq!(
            actions.start_crawling().unwrap(),
            ActionOutcome::Rejected(ValidationError::NoKeywordSelected)
        );
        assert_eq!(*actions.dialogs.alerts.borrow(), vec!["请选择关键词"]);
    }

    #[test]
    fn test_start_crawling_reveals_indicator_and_submits() {
        let mut page = FakePage::with_forms(&["crawlForm"]);
        page.set("keywordSelect", "kw_1");
        page.checked = 1;
        page.elements.insert("loadingIndicator".to_string());
        let actions = actions(page, FakeDialogs::default());

        assert_eq!(actions.start_crawling().unwrap(), ActionOutcome::Submitted);
        assert_eq!(*actions.page().revealed.borrow(), vec!["loadingIndicator"]);
        assert_eq!(submitted(&actions), vec!["crawlForm"]);
        assert!(actions.dialogs.alerts.borrow().is_empty());
    }

    #[test]
    fn test_submit_failure_is_reported() {
        let mut page = FakePage::default();
        page.broken_forms.insert("addPlatformForm".to_string());
        page.set("platformName", "抖音");
        let actions = actions(page, FakeDialogs::default());
        let err = actions.add_platform().unwrap_err();
        assert!(matches!(err, ActionError::SubmitFailed { ref form, .. } if form == "addPlatformForm"));
    }
}
