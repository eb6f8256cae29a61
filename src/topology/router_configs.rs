/// Startup configuration text per router, uploaded verbatim.
pub(super) const ROUTER_CONFIGS: &[(&str, &str)] = &[
    (
        "core-rtr",
        r#"hostname core-rtr
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-INTERNET
 ip address 10.0.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-US-EDGE
 ip address 10.10.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/2
 description TO-UK-EDGE
 ip address 10.20.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/3
 description TO-SG-EDGE
 ip address 10.30.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/4
 description TO-CLOUD-RTR
 ip address 10.200.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/5
 description TO-SOC-RTR
 ip address 10.99.0.1 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/6
 description TO-OT-RTR
 ip address 10.60.0.1 255.255.255.252
 no shutdown
!
router ospf 1
 router-id 1.1.1.1
 network 10.0.0.0 0.0.0.3 area 0
 network 10.10.0.0 0.0.0.3 area 0
 network 10.20.0.0 0.0.0.3 area 0
 network 10.30.0.0 0.0.0.3 area 0
 network 10.60.0.0 0.0.0.3 area 0
 network 10.99.0.0 0.0.0.3 area 0
 network 10.200.0.0 0.0.0.3 area 0
!
ip route 0.0.0.0 0.0.0.0 10.0.0.2
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "us-edge",
        r#"hostname us-edge
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.10.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-US-SW
 ip address 10.10.10.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.10.10.1 10.10.10.19
ip dhcp pool US-LAN
 network 10.10.10.0 255.255.255.0
 default-router 10.10.10.1
 dns-server 10.10.10.1
!
router ospf 1
 router-id 2.2.2.2
 network 10.10.0.0 0.0.0.3 area 0
 network 10.10.10.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.10.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "uk-edge",
        r#"hostname uk-edge
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.20.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-UK-SW
 ip address 10.20.10.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.20.10.1 10.20.10.19
ip dhcp pool UK-LAN
 network 10.20.10.0 255.255.255.0
 default-router 10.20.10.1
 dns-server 10.20.10.1
!
router ospf 1
 router-id 3.3.3.3
 network 10.20.0.0 0.0.0.3 area 0
 network 10.20.10.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.20.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "sg-edge",
        r#"hostname sg-edge
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.30.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-SG-SW
 ip address 10.30.10.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.30.10.1 10.30.10.19
ip dhcp pool SG-LAN
 network 10.30.10.0 255.255.255.0
 default-router 10.30.10.1
 dns-server 10.30.10.1
!
router ospf 1
 router-id 4.4.4.4
 network 10.30.0.0 0.0.0.3 area 0
 network 10.30.10.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.30.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "cloud-rtr",
        r#"hostname cloud-rtr
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.200.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-CLOUD-SW
 ip address 10.200.10.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.200.10.1 10.200.10.19
ip dhcp pool CLOUD-LAN
 network 10.200.10.0 255.255.255.0
 default-router 10.200.10.1
 dns-server 10.200.10.1
!
router ospf 1
 router-id 5.5.5.5
 network 10.200.0.0 0.0.0.3 area 0
 network 10.200.10.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.200.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "soc-rtr",
        r#"hostname soc-rtr
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.99.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-SOC-SW
 ip address 10.99.10.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.99.10.1 10.99.10.19
ip dhcp pool SOC-LAN
 network 10.99.10.0 255.255.255.0
 default-router 10.99.10.1
 dns-server 10.99.10.1
!
router ospf 1
 router-id 6.6.6.6
 network 10.99.0.0 0.0.0.3 area 0
 network 10.99.10.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.99.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
    (
        "ot-rtr",
        r#"hostname ot-rtr
no ip domain-lookup
!
interface GigabitEthernet0/0
 description TO-CORE
 ip address 10.60.0.2 255.255.255.252
 no shutdown
!
interface GigabitEthernet0/1
 description TO-OT-SW
 ip address 10.60.1.1 255.255.255.0
 no shutdown
!
ip dhcp excluded-address 10.60.1.1 10.60.1.19
ip dhcp pool OT-LAN
 network 10.60.1.0 255.255.255.0
 default-router 10.60.1.1
 dns-server 10.60.1.1
!
router ospf 1
 router-id 7.7.7.7
 network 10.60.0.0 0.0.0.3 area 0
 network 10.60.1.0 0.0.0.255 area 0
!
ip route 0.0.0.0 0.0.0.0 10.60.0.1
!
line vty 0 4
 login local
 transport input ssh
!
end
"#,
    ),
];
