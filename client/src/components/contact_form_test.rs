use super::*;

fn render_text_input(placeholder: Option<&'static str>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(LeadFormState::default());
        match placeholder {
            Some(placeholder) => view! {
                <TextInput form=form field=LeadField::Address label="Service Address" placeholder=placeholder/>
            }
            .to_html(),
            None => view! { <TextInput form=form field=LeadField::Address label="Service Address"/> }.to_html(),
        }
    })
}

#[test]
fn text_input_omits_unset_optional_attributes() {
    let html = render_text_input(None);
    assert!(html.contains("id=\"address\""), "{html}");
    assert!(!html.contains("placeholder="), "{html}");
    assert!(!html.contains("autocomplete="), "{html}");
}

#[test]
fn text_input_renders_placeholder_when_set() {
    let html = render_text_input(Some("Street, City, ZIP"));
    assert!(html.contains("placeholder=\"Street, City, ZIP\""), "{html}");
    assert!(!html.contains("autocomplete="), "{html}");
}
