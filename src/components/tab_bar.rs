use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    VendorDetails,
    InvoiceDetails,
    Comments,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::VendorDetails, Tab::InvoiceDetails, Tab::Comments];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::VendorDetails => "Vendor Details",
            Tab::InvoiceDetails => "Invoice Details",
            Tab::Comments => "Comments",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs">
            { for Tab::ALL.into_iter().map(|tab| {
                let onclick = props.on_select.reform(move |_: MouseEvent| tab);
                html! {
                    <button
                        type="button"
                        class={classes!("tab", (tab == props.active).then_some("active"))}
                        {onclick}
                    >
                        {tab.label()}
                    </button>
                }
            }) }
        </div>
    }
}
